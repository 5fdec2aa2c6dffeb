//! food: terminal front-end of the food-ordering backend
//!
//! One subcommand per user action of the web pages. Rendered output goes to
//! stdout, logs to stderr (`FOOD_LOG`, default `food_client=warn`). The
//! session is persisted between runs in the session directory.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use food_client::api::{AuthCheck, MenuItemDraft, MenuItemEdit, QuantityOutcome, Registration};
use food_client::messages::{self, Action};
use food_client::shared::models::{OrderStatus, RestaurantFilter, Role};
use food_client::{ClientConfig, ClientError, FoodClient, view};

#[derive(Parser)]
#[command(name = "food")]
#[command(about = "Food-ordering client")]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "FOOD_API_URL")]
    api_url: Option<String>,
    /// Bearer token sent with every request
    #[arg(long, global = true, env = "FOOD_TOKEN")]
    token: Option<String>,
    /// Directory holding session.json
    #[arg(long, global = true, env = "FOOD_SESSION_DIR")]
    session_dir: Option<std::path::PathBuf>,
    /// Do not read or write the session file
    #[arg(long, global = true, default_value_t = false)]
    no_session: bool,
    /// Request timeout in seconds
    #[arg(long, global = true, env = "FOOD_TIMEOUT_SECS")]
    timeout: Option<u64>,
    /// Answer yes to every confirmation
    #[arg(long, short = 'y', global = true, default_value_t = false)]
    yes: bool,
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Login {
        email: String,
        password: String,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// customer, restaurant or rider
        #[arg(long, default_value = "customer")]
        role: String,
        #[arg(long)]
        cuisine_type: Option<String>,
    },
    Logout,
    /// Show the session, optionally checking it has a role
    Whoami {
        #[arg(long)]
        role: Option<String>,
    },
    Restaurants {
        #[arg(long)]
        cuisine_type: Option<String>,
        #[arg(long)]
        delivery_time: Option<String>,
        #[arg(long)]
        rating: Option<String>,
    },
    Menu {
        restaurant_id: i64,
    },
    Recommended,
    /// Add a dish to the cart
    Add {
        menu_item_id: i64,
        #[arg(long)]
        restaurant_id: i64,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    Cart,
    /// Change the quantity of a cart line by a signed delta
    Quantity {
        item_id: i64,
        #[arg(allow_hyphen_values = true)]
        change: i32,
    },
    SetQuantity {
        cart_id: i64,
        quantity: i32,
    },
    Remove {
        item_id: i64,
    },
    Checkout {
        #[arg(long)]
        address: String,
        #[arg(long, default_value = "")]
        promo_code: String,
    },
    /// Create an order from the cart without the checkout page
    Order {
        #[arg(long)]
        address: String,
    },
    Orders,
    Track {
        order_id: i64,
    },
    MyRestaurants,
    MenuItems {
        restaurant_id: String,
    },
    AddDish {
        #[arg(long)]
        restaurant_id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        image_url: String,
    },
    EditDish {
        menu_id: i64,
        #[arg(long)]
        restaurant_id: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        price: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    DeleteDish {
        menu_id: i64,
        #[arg(long)]
        restaurant_id: String,
    },
    RestaurantOrders {
        restaurant_id: String,
    },
    SetStatus {
        order_id: i64,
        #[arg(long)]
        restaurant_id: i64,
        /// pending, preparing, en_route or delivered
        status: String,
    },
    /// Delete the stored session
    ResetSession,
}

/// A failed action, displayed the way its page would show it
#[derive(Debug)]
struct Failure {
    action: Action,
    error: ClientError,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.action.describe(&self.error))
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

trait During<T> {
    fn during(self, action: Action) -> Result<T, Failure>;
}

impl<T> During<T> for Result<T, ClientError> {
    fn during(self, action: Action) -> Result<T, Failure> {
        self.map_err(|error| Failure { action, error })
    }
}

/// Ask a yes/no question on stdin
fn confirm(question: &str, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }
    print!("{question} [y/N] ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "д" | "да")
}

fn build_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_url {
        config.base_url = url.clone();
    }
    if let Some(token) = &cli.token {
        config = config.with_token(token.clone());
    }
    if let Some(seconds) = cli.timeout {
        config = config.with_timeout(seconds);
    }
    if let Some(dir) = &cli.session_dir {
        config = config.with_session_dir(dir.clone());
    }
    if cli.no_session {
        config = config.without_session_dir();
    }
    config
}

async fn execute(client: &FoodClient, command: Command, yes: bool) -> anyhow::Result<String> {
    let output = match command {
        Command::Login { email, password } => {
            let outcome = client.login(&email, &password).await.during(Action::Login)?;
            let message = if outcome.message.is_empty() {
                messages::LOGIN_SUCCESS
            } else {
                outcome.message.as_str()
            };
            format!("{message}\n→ {}\n", outcome.redirect)
        }
        Command::Register {
            name,
            email,
            password,
            role,
            cuisine_type,
        } => {
            let form = Registration {
                name,
                email,
                password,
                role,
                cuisine_type,
            };
            let next = client.register(form).await.during(Action::Register)?;
            view::next_step(&next)
        }
        Command::Logout => {
            let next = client.logout().await.during(Action::Logout)?;
            view::next_step(&next)
        }
        Command::Whoami { role } => {
            let required = role.map(Role::from);
            match client.check_auth(required.as_ref()).await {
                AuthCheck::Allowed(session) => format!(
                    "user_id: {}\nrole: {}\n",
                    session.user_id.unwrap_or_default(),
                    session.role.map(|r| r.to_string()).unwrap_or_default()
                ),
                AuthCheck::Redirect { to, message } => {
                    let mut out = String::new();
                    if let Some(message) = message {
                        out.push_str(message);
                        out.push('\n');
                    }
                    out.push_str(&format!("→ {to}\n"));
                    out
                }
                AuthCheck::Denied(session) => anyhow::bail!(
                    "access denied for role {}",
                    session.role.map(|r| r.to_string()).unwrap_or_default()
                ),
            }
        }
        Command::Restaurants {
            cuisine_type,
            delivery_time,
            rating,
        } => {
            let filter = RestaurantFilter {
                cuisine_type,
                delivery_time,
                rating,
            };
            let restaurants = client
                .load_restaurants(&filter)
                .await
                .during(Action::LoadRestaurants)?;
            view::restaurants(&restaurants)
        }
        Command::Menu { restaurant_id } => {
            let menu = client.load_menu(restaurant_id).await.during(Action::LoadMenu)?;
            view::menu(&menu)
        }
        Command::Recommended => {
            let dishes = client.recommended_dishes().await.during(Action::LoadRecommended)?;
            view::recommended(&dishes)
        }
        Command::Add {
            menu_item_id,
            restaurant_id,
            quantity,
        } => {
            client
                .add_to_cart(menu_item_id, quantity, restaurant_id)
                .await
                .during(Action::AddToCart)?;
            format!("{}\n", messages::ADDED_TO_CART)
        }
        Command::Cart => {
            let cart = client.load_cart().await.during(Action::LoadCart)?;
            view::cart(&cart)
        }
        Command::Quantity { item_id, change } => {
            let outcome = client
                .adjust_quantity(item_id, change, |question| confirm(question, yes))
                .await
                .during(Action::UpdateQuantity)?;
            match outcome {
                QuantityOutcome::Updated(cart) | QuantityOutcome::Removed(cart) => view::cart(&cart),
                QuantityOutcome::Kept => String::new(),
            }
        }
        Command::SetQuantity { cart_id, quantity } => {
            let cart = client
                .set_quantity(cart_id, quantity)
                .await
                .during(Action::SetQuantity)?;
            view::cart(&cart)
        }
        Command::Remove { item_id } => {
            let cart = client
                .remove_from_cart(item_id)
                .await
                .during(Action::RemoveFromCart)?;
            view::cart(&cart)
        }
        Command::Checkout {
            address,
            promo_code,
        } => {
            let next = client
                .checkout(&address, &promo_code)
                .await
                .during(Action::Checkout)?;
            view::next_step(&next)
        }
        Command::Order { address } => {
            let created = client.place_order(&address).await.during(Action::PlaceOrder)?;
            format!("{}\nЗаказ #{}\n", messages::ORDER_PLACED, created.order_id)
        }
        Command::Orders => {
            let orders = client.load_orders().await.during(Action::LoadOrders)?;
            view::orders(&orders)
        }
        Command::Track { order_id } => {
            let tracking = client.track_order(order_id).await.during(Action::TrackOrder)?;
            view::tracking(&tracking)
        }
        Command::MyRestaurants => {
            let restaurants = client.my_restaurants().await.during(Action::LoadMyRestaurants)?;
            view::restaurant_options(&restaurants)
        }
        Command::MenuItems { restaurant_id } => {
            let items = client
                .load_menu_items(&restaurant_id)
                .await
                .during(Action::LoadMenuItems)?;
            view::managed_menu(&items)
        }
        Command::AddDish {
            restaurant_id,
            name,
            price,
            description,
            image_url,
        } => {
            let draft = MenuItemDraft {
                restaurant_id,
                name,
                price,
                description,
                image_url,
            };
            let created = client.add_menu_item(draft).await.during(Action::AddMenuItem)?;
            format!("{}\nID: {}\n", messages::MENU_ITEM_ADDED, created.menu_item_id)
        }
        Command::EditDish {
            menu_id,
            restaurant_id,
            name,
            price,
            description,
        } => {
            let edit = MenuItemEdit {
                menu_id,
                restaurant_id,
                name,
                price,
                description,
            };
            let response = client.edit_menu_item(edit).await.during(Action::EditMenuItem)?;
            if response.message.is_empty() {
                format!("{}\n", messages::MENU_ITEM_UPDATED)
            } else {
                format!("{}\n", response.message)
            }
        }
        Command::DeleteDish {
            menu_id,
            restaurant_id,
        } => {
            let response = client
                .delete_menu_item(menu_id, &restaurant_id, |question| confirm(question, yes))
                .await
                .during(Action::DeleteMenuItem)?;
            match response {
                Some(response) if !response.message.is_empty() => format!("{}\n", response.message),
                Some(_) => format!("{}\n", messages::MENU_ITEM_DELETED),
                None => String::new(),
            }
        }
        Command::RestaurantOrders { restaurant_id } => {
            let orders = client
                .load_restaurant_orders(&restaurant_id)
                .await
                .during(Action::LoadRestaurantOrders)?;
            view::restaurant_orders(&orders)
        }
        Command::SetStatus {
            order_id,
            restaurant_id,
            status,
        } => {
            let status: OrderStatus = status.parse()?;
            client
                .update_order_status(order_id, restaurant_id, status)
                .await
                .during(Action::UpdateOrderStatus)?;
            format!("{}\n", messages::ORDER_STATUS_UPDATED)
        }
        Command::ResetSession => {
            client.forget_session()?;
            "Session cleared\n".to_string()
        }
    };
    Ok(output)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = build_config(&cli);
    tracing::debug!(base_url = %config.base_url, "Starting food client");

    let client = FoodClient::new(&config)?;
    let result = execute(&client, cli.command, cli.yes).await;

    // Cookies may change even when the action fails
    if let Err(e) = client.persist_session() {
        tracing::warn!(error = %e, "Failed to save session");
    }

    print!("{}", result?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "food_client=debug,food=debug"
    } else {
        "food_client=warn,food=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("FOOD_LOG")
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
