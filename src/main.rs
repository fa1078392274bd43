use std::sync::Arc;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use order_dashboard::cache::QueryCache;
use order_dashboard::client::HttpOrderApi;
use order_dashboard::config::DashboardConfig;
use order_dashboard::dashboard::Dashboard;
use order_dashboard::entities::order::{OrderAction, OrderDetail, OrderStatus};
use order_dashboard::entities::profile::UpdateProfile;
use order_dashboard::entities::query::{OrderQueryResult, OrdersFilter};

#[derive(Parser, Debug)]
#[command(name = "order-dashboard", about = "Browse and manage restaurant orders")]
struct Cli {
    /// Base URL of the order API (overrides API_BASE_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List one page of orders
    List {
        #[arg(long)]
        page: Option<String>,
        #[arg(long)]
        order_id: Option<String>,
        #[arg(long)]
        customer: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one order with its items
    Show { order_id: String },
    Approve { order_id: String },
    Dispatch { order_id: String },
    Deliver { order_id: String },
    Cancel { order_id: String },
    /// Update the restaurant profile
    Profile {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
}

fn money(cents: u64) -> String {
    format!("R$ {},{:02}", cents / 100, cents % 100)
}

fn status_label(s: OrderStatus) -> &'static str {
    match s {
        OrderStatus::Pending => "Pendente",
        OrderStatus::Canceled => "Cancelado",
        OrderStatus::Processing => "Em preparo",
        OrderStatus::Delivering => "Em entrega",
        OrderStatus::Delivered => "Entregue",
    }
}

fn print_page(page: &OrderQueryResult) {
    for o in &page.orders {
        let actions: Vec<&str> = o
            .status
            .available_actions()
            .iter()
            .map(OrderAction::as_str)
            .collect();
        println!(
            "{:<38} {:<20} {:<11} {:<20} {:>12}  [{}]",
            o.order_id,
            o.created_at.format("%Y-%m-%d %H:%M"),
            status_label(o.status),
            o.customer_name,
            money(o.total),
            actions.join(", ")
        );
    }
    let pages = page.meta.total_count.div_ceil(u64::from(page.meta.per_page.max(1)));
    println!(
        "page {} of {} ({} orders)",
        page.meta.page_index + 1,
        pages.max(1),
        page.meta.total_count
    );
}

fn print_detail(d: &OrderDetail) {
    println!("order    {}", d.id);
    println!("status   {}", status_label(d.status));
    println!("placed   {}", d.created_at.format("%Y-%m-%d %H:%M"));
    println!("customer {} <{}>", d.customer.name, d.customer.email);
    if let Some(phone) = &d.customer.phone {
        println!("phone    {phone}");
    }
    for item in &d.order_items {
        println!(
            "  {:>3} x {:<24} {:>12}",
            item.quantity,
            item.product.name,
            money(item.subtotal_in_cents())
        );
    }
    println!("total    {}", money(d.total_in_cents));
}

async fn transition(
    dashboard: &Dashboard,
    order_id: &str,
    action: OrderAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let current = dashboard.order_details(order_id).await?.status;
    let next = dashboard
        .transitions()
        .execute(order_id, current, action)
        .await?;
    println!("{order_id}: {} -> {}", status_label(current), status_label(next));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let mut config = DashboardConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    let api = HttpOrderApi::new(&config.api_base_url, config.request_timeout)?;
    let dashboard = Dashboard::new(Arc::new(api), QueryCache::new());

    match cli.cmd {
        Command::List {
            page,
            order_id,
            customer,
            status,
        } => {
            let filter = OrdersFilter {
                page_index: page,
                order_id,
                customer_name: customer,
                status,
            };
            let page = dashboard.orders(&filter).await?;
            print_page(&page);
        }
        Command::Show { order_id } => {
            let d = dashboard.order_details(&order_id).await?;
            print_detail(&d);
        }
        Command::Approve { order_id } => {
            transition(&dashboard, &order_id, OrderAction::Approve).await?
        }
        Command::Dispatch { order_id } => {
            transition(&dashboard, &order_id, OrderAction::Dispatch).await?
        }
        Command::Deliver { order_id } => {
            transition(&dashboard, &order_id, OrderAction::Deliver).await?
        }
        Command::Cancel { order_id } => {
            transition(&dashboard, &order_id, OrderAction::Cancel).await?
        }
        Command::Profile { name, description } => {
            dashboard
                .update_profile(&UpdateProfile { name, description })
                .await?;
            println!("profile updated");
        }
    }

    Ok(())
}
