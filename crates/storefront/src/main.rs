//! Breadbox Storefront - terminal storefront client.
//!
//! An interactive front end for the Breadbox ordering API. This binary is
//! the UI event-handler layer: it reads commands from stdin and translates
//! them into calls on [`StorefrontApp`], which owns the ordering core.
//!
//! # Commands
//!
//! - `list` - refetch and show the catalog
//! - `add <product-id>` - add one unit to the cart
//! - `qty <product-id> <n>` - set a quantity (0 removes the line)
//! - `cart` - show the current cart
//! - `order <name> <email>` - submit the cart as an order
//! - `status <order-id>` - look up an order
//! - `quit` - exit

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use std::io::{self, BufRead, Write};

use breadbox_storefront::api::HttpClient;
use breadbox_storefront::app::StorefrontApp;
use breadbox_storefront::config::StorefrontConfig;
use breadbox_storefront::render::TextRenderer;

const HELP: &str = "commands: list | add <id> | qty <id> <n> | cart | order <name> <email> | status <id> | quit";

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter; default to info for our crates
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "breadbox_storefront=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = StorefrontConfig::from_env().expect("Failed to load configuration");
    tracing::info!(api_base_url = %config.api_base_url, "Starting storefront");

    let client = HttpClient::new(&config).expect("Failed to build API client");
    let mut app = StorefrontApp::new(client, TextRenderer);

    // Initial catalog load; a failure already rendered its message and the
    // user can retry with `list`
    let _ = app.load_catalog().await;

    println!("{HELP}");
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        if !dispatch(&mut app, line.trim()).await {
            break;
        }
    }
}

/// Run one command against the app. Returns `false` to exit.
async fn dispatch(app: &mut StorefrontApp<HttpClient, TextRenderer>, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("");
    let args: Vec<&str> = parts.collect();

    // Every app call renders its own success or error output; failures are
    // already recovered by the time the method returns
    match (command, args.as_slice()) {
        ("", []) => {}
        ("list", []) => {
            let _ = app.load_catalog().await;
        }
        ("add", [id]) => match id.parse() {
            Ok(product_id) => app.add_to_cart(product_id),
            Err(_) => println!("add: product id must be a number"),
        },
        ("qty", [id, quantity]) => match (id.parse(), quantity.parse()) {
            (Ok(product_id), Ok(quantity)) => {
                let _ = app.set_quantity(product_id, quantity);
            }
            _ => println!("qty: expected <product-id> <quantity>"),
        },
        ("cart", []) => {
            let snapshot = app.cart().snapshot();
            if snapshot.is_empty() {
                println!("Your cart is empty");
            } else {
                for item in &snapshot {
                    println!("product {} x {}", item.product_id, item.quantity);
                }
            }
        }
        ("order", [name, email]) => {
            let _ = app.submit_order(name, email).await;
        }
        ("status", [id]) => match id.parse() {
            Ok(order_id) => {
                let _ = app.check_status(order_id).await;
            }
            Err(_) => println!("status: order id must be a number"),
        },
        ("quit" | "exit", []) => return false,
        _ => println!("{HELP}"),
    }

    true
}
