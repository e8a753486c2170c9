//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use galactic_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{CartLine, CartLineId},
        },
        catalog::{
            MockCatalogStore,
            models::{Destination, DestinationId, ItemRef, MarketItem, MarketItemId},
        },
        users::{MockUsersService, models::UserId},
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_ID: UserId = UserId::new(1);

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_id(TEST_USER_ID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_catalog_mock() -> MockCatalogStore {
    let mut catalog = MockCatalogStore::new();

    catalog.expect_list_destinations().never();
    catalog.expect_get_destination().never();
    catalog.expect_create_destination().never();
    catalog.expect_update_destination().never();
    catalog.expect_list_market_items().never();
    catalog.expect_get_market_item().never();
    catalog.expect_create_market_item().never();
    catalog.expect_update_market_item().never();
    catalog.expect_item_price().never();

    catalog
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_add_item().never();
    carts.expect_list_lines().never();
    carts.expect_checkout().never();
    carts.expect_clear_cart().never();
    carts.expect_update_quantity().never();
    carts.expect_remove_line().never();

    carts
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_register().never();
    users.expect_login().never();
    users.expect_authenticate().never();

    users
}

pub(crate) fn state_from_mocks(
    catalog: MockCatalogStore,
    carts: MockCartsService,
    users: MockUsersService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        catalog: Arc::new(catalog),
        carts: Arc::new(carts),
        users: Arc::new(users),
    })
}

pub(crate) fn state_with_users(users: MockUsersService) -> Arc<State> {
    state_from_mocks(strict_catalog_mock(), strict_carts_mock(), users)
}

pub(crate) fn catalog_service(catalog: MockCatalogStore, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_from_mocks(catalog, strict_carts_mock(), strict_users_mock())))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_from_mocks(strict_catalog_mock(), carts, strict_users_mock())))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_users(users)))
            .push(route),
    )
}

pub(crate) fn make_destination(id: i64, price: Decimal) -> Destination {
    Destination {
        id: DestinationId::new(id),
        name: "Mars".to_string(),
        description: "Red dunes and thin air".to_string(),
        image_url: "https://example.com/mars.png".to_string(),
        price,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_market_item(id: i64, price: Decimal) -> MarketItem {
    MarketItem {
        id: MarketItemId::new(id),
        name: "Moon Rock".to_string(),
        description: "Genuine regolith".to_string(),
        price,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_line(id: i64, item: ItemRef, quantity: u32, unit_price: Decimal) -> CartLine {
    CartLine {
        id: CartLineId::new(id),
        user_id: TEST_USER_ID,
        item,
        quantity,
        unit_price,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
