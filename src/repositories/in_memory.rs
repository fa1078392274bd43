use crate::entities::order::{
    Customer, OrderAction, OrderDetail, OrderItem, OrderStatus, Product,
};
use crate::entities::profile::UpdateProfile;
use crate::entities::query::{OrderQueryKey, OrderQueryResult, PageMeta};
use crate::errors::RepoErr;
use crate::repositories::{OrderRepository, PER_PAGE};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    inner: Arc<RwLock<HashMap<String, OrderDetail>>>,
    profile: Arc<RwLock<Option<UpdateProfile>>>,
}

const CUSTOMERS: [&str; 6] = [
    "Ana Souza",
    "Bruno Lima",
    "Carla Mendes",
    "Diego Rocha",
    "Elisa Prado",
    "Thiago Oliveira",
];

const MENU: [(&str, u64); 4] = [
    ("Margherita", 3990),
    ("Pepperoni", 4590),
    ("Quatro Queijos", 4990),
    ("Calabresa", 4290),
];

impl InMemoryOrderRepository {
    /// Repository pre-filled with `n` generated orders spread over every status.
    pub async fn seeded(n: usize) -> Self {
        let repo = Self::default();
        {
            let mut w = repo.inner.write().await;
            for i in 0..n {
                let o = generated_order(i);
                w.insert(o.id.clone(), o);
            }
        }
        repo
    }
}

fn generated_order(i: usize) -> OrderDetail {
    let customer = CUSTOMERS[i % CUSTOMERS.len()];
    let items: Vec<OrderItem> = (0..=(i % 3))
        .map(|j| {
            let (name, price) = MENU[(i + j) % MENU.len()];
            OrderItem {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                price_in_cents: price,
                quantity: NonZeroU32::new((j % 2 + 1) as u32).unwrap_or(NonZeroU32::MIN),
                product: Product {
                    name: name.to_string(),
                },
            }
        })
        .collect();
    let total = items.iter().map(OrderItem::subtotal_in_cents).sum();
    OrderDetail {
        id: Uuid::new_v4().to_string(),
        created_at: Utc::now() - Duration::minutes(15 * i as i64),
        status: OrderStatus::ALL[i % OrderStatus::ALL.len()],
        total_in_cents: total,
        customer: Customer {
            name: customer.to_string(),
            email: format!(
                "{}@example.com",
                customer.to_lowercase().replace(' ', ".")
            ),
            phone: (i % 2 == 0).then(|| format!("+55 11 9{:04}-{:04}", i, i * 7 % 10_000)),
        },
        order_items: items,
    }
}

fn matches_query(o: &OrderDetail, q: &OrderQueryKey) -> bool {
    q.order_id.as_ref().map_or(true, |id| o.id.contains(id.as_str()))
        && q.customer_name.as_ref().map_or(true, |n| {
            o.customer.name.to_lowercase().contains(&n.to_lowercase())
        })
        && q.status.map_or(true, |s| o.status == s)
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn get_by_id(&self, id: &str) -> Result<OrderDetail, RepoErr> {
        let map = self.inner.read().await;
        map.get(id).cloned().ok_or(RepoErr::NotFound)
    }

    async fn list(&self, q: &OrderQueryKey) -> Result<OrderQueryResult, RepoErr> {
        let map = self.inner.read().await;
        let mut items: Vec<&OrderDetail> = map.values().filter(|o| matches_query(o, q)).collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));

        let page_index = q.page_index.unwrap_or(0);
        let start = (page_index as usize).saturating_mul(PER_PAGE as usize);
        let orders = items
            .iter()
            .skip(start)
            .take(PER_PAGE as usize)
            .map(|o| o.summary())
            .collect();

        Ok(OrderQueryResult {
            orders,
            meta: PageMeta {
                page_index,
                per_page: PER_PAGE,
                total_count: items.len() as u64,
            },
        })
    }

    async fn apply(&self, id: &str, action: OrderAction) -> Result<OrderStatus, RepoErr> {
        let mut map = self.inner.write().await;
        let o = map.get_mut(id).ok_or(RepoErr::NotFound)?;
        if !o.status.allows(action) {
            return Err(RepoErr::PreconditionFailed {
                action,
                status: o.status,
            });
        }
        o.status = action.target();
        Ok(o.status)
    }

    async fn update_profile(&self, profile: UpdateProfile) -> Result<(), RepoErr> {
        if profile.name.trim().is_empty() {
            return Err(RepoErr::Invalid("name must not be blank".into()));
        }
        *self.profile.write().await = Some(profile);
        Ok(())
    }

    async fn profile(&self) -> Result<Option<UpdateProfile>, RepoErr> {
        Ok(self.profile.read().await.clone())
    }
}
