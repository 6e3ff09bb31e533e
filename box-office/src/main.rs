//! Box office demo binary
//!
//! Drives one scripted order through the store: pick tickets, fill in the
//! contact form, submit, and wait for the checkout outcome.

use box_office::{
    CheckoutStatus, Config, ContactField, FareClass, FestivalContent, LoggingCheckout,
    OrderAction, OrderEnvironment, OrderReducer, OrderState, OrderSummary,
};
use festival_core::environment::SystemClock;
use festival_runtime::Store;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.app.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let content = match &config.app.content_path {
        Some(path) => FestivalContent::from_json_file(path)?,
        None => FestivalContent::default(),
    };

    tracing::info!(
        festival = %content.name,
        dates = %content.dates,
        venue = %content.venue,
        "Box office starting"
    );

    let env = OrderEnvironment::new(
        Arc::new(SystemClock),
        LoggingCheckout::shared(config.checkout_latency()),
    )
    .with_checkout_timeout(config.checkout_timeout());

    let store = Store::new(OrderState::new(), OrderReducer::new(), env);

    println!("=== {} | {} | {} ===\n", content.name, content.dates, content.venue);

    for (fare, delta) in [(FareClass::Adult, 3), (FareClass::Child, 1)] {
        store.send(OrderAction::ChangeQuantity { fare, delta }).await?;
    }

    let summary = store.state(|state| OrderSummary::from(state)).await;
    print!("{summary}");
    println!("Submit: {:?}\n", summary.submit_state);

    for field in ContactField::ALL {
        store
            .send(OrderAction::UpdateContactField {
                field,
                value: field.placeholder().to_string(),
            })
            .await?;
    }

    println!(">>> {}", content.submit_label);
    let mut handle = store.send(OrderAction::Submit).await?;
    handle
        .wait_with_timeout(config.checkout_timeout() + config.shutdown_timeout())
        .await?;

    store.shutdown(config.shutdown_timeout()).await?;

    match store.state(|s| s.checkout().clone()).await {
        CheckoutStatus::Accepted { receipt } => {
            println!("Order {} accepted, reference {}", receipt.order_id, receipt.reference);
            println!("Amount due: {}", receipt.amount);
        },
        CheckoutStatus::Failed { order_id, reason } => {
            println!("Order {order_id} failed: {reason}");
        },
        status => println!("Checkout still {status:?}"),
    }
    println!("{}", content.checkout_note);

    Ok(())
}
