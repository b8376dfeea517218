//! Cart operation orchestration.
//!
//! These functions pair the cart engine's state changes with their
//! user-facing notifications. They are synchronous and session-agnostic;
//! route handlers load the cart from the session, call in here, and save it
//! back.

use pulseira_core::{
    Cart, CartError, Notification, Notifier, ProductId, ProductSnapshot, order_message,
    whatsapp_link,
};

use crate::config::WhatsAppConfig;

/// Add a product snapshot to the cart.
///
/// Fires the "added" notification exactly once per successful call.
///
/// # Errors
///
/// Propagates [`CartError::EmptyProductId`]; no notification fires and the
/// cart is untouched.
pub fn add_to_cart(
    cart: &mut Cart,
    snapshot: ProductSnapshot,
    notifier: &mut dyn Notifier,
) -> Result<(), CartError> {
    let name = snapshot.name.clone();
    cart.add_item(snapshot)?;

    notifier.notify(Notification::info(
        "Pulseirinha adicionada! 💕",
        format!("{name} foi adicionada ao carrinho."),
    ));
    Ok(())
}

/// Remove a line from the cart.
///
/// The "removed" notification fires unconditionally, even when the
/// identifier was not in the cart. That mirrors the storefront's observed
/// behavior and is kept on purpose; see DESIGN.md before changing it.
pub fn remove_from_cart(cart: &mut Cart, product_id: &ProductId, notifier: &mut dyn Notifier) -> bool {
    let removed = cart.remove_item(product_id);

    notifier.notify(Notification::destructive(
        "Item removido",
        "Produto removido do carrinho.",
    ));
    removed
}

/// Run the checkout hand-off.
///
/// Empty cart: refused silently - no message, no link, no notification, no
/// state change. Otherwise builds the order message and the WhatsApp deep
/// link, clears the cart, fires the "submitted" notification, and returns
/// the link for the caller to open.
///
/// Clearing and notifying are NOT transactional with the caller actually
/// opening the link: the hand-off is best-effort and its outcome is never
/// awaited, so the cart is committed to empty the moment this returns.
pub fn checkout(
    cart: &mut Cart,
    whatsapp: &WhatsAppConfig,
    notifier: &mut dyn Notifier,
) -> Option<String> {
    let message = order_message(cart, &whatsapp.template)?;
    let url = whatsapp_link(&message, &whatsapp.number);

    cart.clear();
    notifier.notify(Notification::info(
        "Pedido enviado com sucesso! 💕",
        "Seu pedido foi montado no WhatsApp.",
    ));

    Some(url)
}

#[cfg(test)]
mod tests {
    use pulseira_core::{CurrencyCode, MessageTemplate, Price, Severity};

    use super::*;

    fn snapshot(id: &str, name: &str, minor: i64) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::new(id),
            name: name.to_owned(),
            unit_price: Price::from_minor_units(minor, CurrencyCode::BRL),
            image_url: String::new(),
        }
    }

    fn whatsapp() -> WhatsAppConfig {
        WhatsAppConfig {
            number: "5514999999999".to_owned(),
            template: MessageTemplate::default(),
        }
    }

    #[test]
    fn test_add_notifies_exactly_once() {
        let mut cart = Cart::new();
        let mut sink: Vec<Notification> = Vec::new();

        add_to_cart(&mut cart, snapshot("a", "Star", 1000), &mut sink).expect("add");

        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].severity, Severity::Info);
        assert!(sink[0].description.contains("Star"));
    }

    #[test]
    fn test_failed_add_does_not_notify() {
        let mut cart = Cart::new();
        let mut sink: Vec<Notification> = Vec::new();

        let err = add_to_cart(&mut cart, snapshot("", "Ghost", 100), &mut sink).unwrap_err();
        assert_eq!(err, CartError::EmptyProductId);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_remove_notifies_even_on_noop() {
        let mut cart = Cart::new();
        let mut sink: Vec<Notification> = Vec::new();

        let removed = remove_from_cart(&mut cart, &ProductId::new("absent"), &mut sink);

        assert!(!removed);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].severity, Severity::Destructive);
    }

    #[test]
    fn test_checkout_empty_cart_is_refused_silently() {
        let mut cart = Cart::new();
        let mut sink: Vec<Notification> = Vec::new();

        assert_eq!(checkout(&mut cart, &whatsapp(), &mut sink), None);
        assert!(sink.is_empty());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_clears_cart_and_returns_link() {
        let mut cart = Cart::new();
        let mut sink: Vec<Notification> = Vec::new();
        add_to_cart(&mut cart, snapshot("a", "Star", 1000), &mut sink).expect("add");
        sink.clear();

        let url = checkout(&mut cart, &whatsapp(), &mut sink).expect("non-empty cart");

        assert!(url.starts_with("https://wa.me/5514999999999?text="));
        assert!(cart.is_empty());
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].severity, Severity::Info);
    }

    #[test]
    fn test_checkout_link_encodes_message() {
        let mut cart = Cart::new();
        let mut sink: Vec<Notification> = Vec::new();
        add_to_cart(&mut cart, snapshot("a", "Star", 1000), &mut sink).expect("add");

        let url = checkout(&mut cart, &whatsapp(), &mut sink).expect("non-empty cart");
        let encoded = url.split("?text=").nth(1).expect("text parameter");
        let decoded = urlencoding::decode(encoded).expect("valid encoding");

        assert!(decoded.contains("1. Star (1x) - R$ 10.00"));
        assert!(decoded.contains("Total: R$ 10.00"));
    }
}
