//! Interactive pizza ordering, start to checkout.
//!
//! Walks through address, product, size, contact details, and a priced
//! approval prompt against a stubbed store catalog. Fields already known
//! from the environment skip their prompt steps:
//!
//! ```text
//! PIZZA_ADDRESS="1 Main St, Springfield" cargo run --example pizza_order
//! ```
//!
//! Recognized variables: `PIZZA_ADDRESS`, `PIZZA_FIRST_NAME`,
//! `PIZZA_LAST_NAME`, `PIZZA_EMAIL`, `PIZZA_PHONE`.

use annai::prelude::*;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Customer {
    first_name: Option<String>,
    last_name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct OrderDraft {
    customer: Customer,
    store_id: Option<u32>,
    product_code: Option<String>,
    item_code: Option<String>,
    quoted_price: Option<f64>,
}

struct Variant {
    code: &'static str,
    size: &'static str,
    price: f64,
}

struct Product {
    code: &'static str,
    name: &'static str,
    variants: &'static [Variant],
}

const MENU: &[Product] = &[
    Product {
        code: "S_PIZPX",
        name: "ExtravaganZZa",
        variants: &[
            Variant {
                code: "P10IREPX",
                size: "Small (10\")",
                price: 13.99,
            },
            Variant {
                code: "P12IREPX",
                size: "Medium (12\")",
                price: 16.99,
            },
            Variant {
                code: "P14IREPX",
                size: "Large (14\")",
                price: 19.99,
            },
        ],
    },
    Product {
        code: "S_PIZPH",
        name: "Philly Cheese Steak",
        variants: &[
            Variant {
                code: "P12IPAPH",
                size: "Medium (12\")",
                price: 15.49,
            },
            Variant {
                code: "P14IPAPH",
                size: "Large (14\")",
                price: 18.49,
            },
        ],
    },
    Product {
        code: "S_PIZZA",
        name: "Build Your Own",
        variants: &[
            Variant {
                code: "P10ISCPZ",
                size: "Small (10\")",
                price: 9.99,
            },
            Variant {
                code: "P14ISCPZ",
                size: "Large (14\")",
                price: 13.99,
            },
        ],
    },
];

/// Pretend store lookup: any address with a street number has an open
/// delivery store nearby.
async fn nearest_open_store(address: &str) -> Option<u32> {
    if address.chars().any(|c| c.is_ascii_digit()) {
        Some(4_273)
    } else {
        None
    }
}

struct Quote {
    total: f64,
    wait_minutes: u32,
}

/// Prices the drafted item the way a storefront quote would: base price
/// plus delivery fee, then tax.
async fn price_order(draft: &OrderDraft) -> Option<Quote> {
    let code = draft.item_code.as_deref()?;
    let variant = MENU
        .iter()
        .flat_map(|p| p.variants.iter())
        .find(|v| v.code == code)?;
    Some(Quote {
        total: (variant.price + 3.99) * 1.08,
        wait_minutes: 25,
    })
}

define_step!(GetAddress);

#[async_trait]
impl Step<OrderDraft> for GetAddress {
    async fn run(&self, input: &mut Prompter<'_>, state: &OrderDraft) -> StepResult<OrderDraft> {
        let answer = input
            .ask_text("Enter your address with proper commas. EX: Street, City, State, Zip")
            .await?;
        if answer.is_empty() {
            return Err(FlowSignal::resume_with("Cannot be blank").into());
        }
        let mut next = state.clone();
        next.customer.address = Some(answer);
        Ok(next)
    }
}

define_step!(PickProduct);

#[async_trait]
impl Step<OrderDraft> for PickProduct {
    async fn run(&self, input: &mut Prompter<'_>, state: &OrderDraft) -> StepResult<OrderDraft> {
        let address = state.customer.address.clone().unwrap_or_default();
        let store_id = match nearest_open_store(&address).await {
            Some(store_id) => store_id,
            None => return Err(FlowSignal::back_with("No nearby open stores").into()),
        };

        let items: Vec<PromptItem> = MENU.iter().map(|p| PromptItem::new(p.name)).collect();
        let choice = input.ask_choice(&items).await?;
        let product = match MENU.iter().find(|p| p.name == choice.label) {
            Some(product) => product,
            None => {
                return Err(WizardError::Step {
                    step_name: self.name(),
                    details: format!("unknown product: {}", choice.label),
                }
                .into())
            }
        };

        let mut next = state.clone();
        next.store_id = Some(store_id);
        next.product_code = Some(product.code.to_string());
        Ok(next)
    }
}

define_step!(PickVariant);

#[async_trait]
impl Step<OrderDraft> for PickVariant {
    async fn run(&self, input: &mut Prompter<'_>, state: &OrderDraft) -> StepResult<OrderDraft> {
        let product = match state
            .product_code
            .as_deref()
            .and_then(|code| MENU.iter().find(|p| p.code == code))
        {
            Some(product) => product,
            None => return Err(FlowSignal::back_with("Pick a product").into()),
        };

        let items: Vec<PromptItem> = product
            .variants
            .iter()
            .map(|v| PromptItem::with_detail(v.size, format!("${:.2}", v.price)))
            .collect();
        let choice = input.ask_choice(&items).await?;
        let variant = match product.variants.iter().find(|v| v.size == choice.label) {
            Some(variant) => variant,
            None => {
                return Err(WizardError::Step {
                    step_name: self.name(),
                    details: format!("unknown variant: {}", choice.label),
                }
                .into())
            }
        };

        let mut next = state.clone();
        next.item_code = Some(variant.code.to_string());
        Ok(next)
    }
}

/// One required free-text field on the customer record.
struct CustomerField {
    label: &'static str,
    prompt: &'static str,
    apply: fn(&mut Customer, String),
}

#[async_trait]
impl Step<OrderDraft> for CustomerField {
    async fn run(&self, input: &mut Prompter<'_>, state: &OrderDraft) -> StepResult<OrderDraft> {
        let answer = input.ask_text(self.prompt).await?;
        if answer.is_empty() {
            return Err(FlowSignal::resume_with("Cannot be blank").into());
        }
        let mut next = state.clone();
        (self.apply)(&mut next.customer, answer);
        Ok(next)
    }

    fn name(&self) -> StepName {
        StepName::new(self.label)
    }
}

fn first_name_step() -> CustomerField {
    CustomerField {
        label: "GetFirstName",
        prompt: "Enter your first name",
        apply: |c, v| c.first_name = Some(v),
    }
}

fn last_name_step() -> CustomerField {
    CustomerField {
        label: "GetLastName",
        prompt: "Enter your last name",
        apply: |c, v| c.last_name = Some(v),
    }
}

fn email_step() -> CustomerField {
    CustomerField {
        label: "GetEmail",
        prompt: "Enter your email",
        apply: |c, v| c.email = Some(v),
    }
}

fn phone_step() -> CustomerField {
    CustomerField {
        label: "GetPhone",
        prompt: "Enter your phone number",
        apply: |c, v| c.phone = Some(v),
    }
}

define_step!(Approve);

#[async_trait]
impl Step<OrderDraft> for Approve {
    async fn run(&self, input: &mut Prompter<'_>, state: &OrderDraft) -> StepResult<OrderDraft> {
        let quote = match price_order(state).await {
            Some(quote) => quote,
            None => return Err(FlowSignal::back_with("Pick a size").into()),
        };
        let summary = format!(
            "Your order will cost ${:.2} and take around {} minutes. \
             You must pay in cash when it arrives. Press enter to approve.",
            quote.total, quote.wait_minutes
        );
        let _ = input.ask_text(&summary).await?;

        let mut next = state.clone();
        next.quoted_price = Some(quote.total);
        Ok(next)
    }
}

#[tokio::main]
async fn main() -> Result<(), WizardError> {
    tracing_subscriber::fmt::init();

    // Fields already configured skip their prompt steps entirely. The
    // wizard only ever sees the final ordered list.
    let prefilled = Customer {
        address: env::var("PIZZA_ADDRESS").ok(),
        first_name: env::var("PIZZA_FIRST_NAME").ok(),
        last_name: env::var("PIZZA_LAST_NAME").ok(),
        email: env::var("PIZZA_EMAIL").ok(),
        phone: env::var("PIZZA_PHONE").ok(),
    };
    let initial = OrderDraft {
        customer: prefilled.clone(),
        ..OrderDraft::default()
    };

    let wizard = Wizard::builder()
        .title("Order Pizza")
        .add_step_if(prefilled.address.is_none(), GetAddress)
        .add_step(PickProduct)
        .add_step(PickVariant)
        .add_step_if(prefilled.first_name.is_none(), first_name_step())
        .add_step_if(prefilled.last_name.is_none(), last_name_step())
        .add_step_if(prefilled.email.is_none(), email_step())
        .add_step_if(prefilled.phone.is_none(), phone_step())
        .add_step(Approve)
        .build()?;

    let mut surface = ConsoleSurface::new();
    let order = wizard.run(&mut surface, initial).await?;

    // A cancelled run still returns the partial draft; only a priced,
    // approved order is complete enough to place.
    match order.quoted_price {
        Some(price) => println!(
            "Order placed! Item {} from store {}, ${:.2} due in cash.",
            order.item_code.unwrap_or_default(),
            order.store_id.unwrap_or_default(),
            price
        ),
        None => println!("Order abandoned."),
    }

    Ok(())
}
