//! Given steps for assistant access policy BDD scenarios.

use super::world::AccessWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("the stock assistant profiles")]
fn stock_assistant_profiles(world: &mut AccessWorld) -> Result<(), eyre::Report> {
    world
        .configure_stock_gateway()
        .wrap_err("build gateway from stock configuration")
}

#[given("the widget sends an authorization header")]
fn widget_sends_authorization(world: &mut AccessWorld) {
    world.authorization = Some("Bearer widget-session".to_owned());
}
