//! Checkout message formatting and WhatsApp deep-link construction.
//!
//! Checkout delegates order confirmation to WhatsApp: the cart is rendered
//! into a human-readable order summary, percent-encoded, and embedded into a
//! `wa.me` deep link. The hand-off is one-way and unauthenticated; nothing
//! here performs I/O.

use crate::cart::Cart;

/// Greeting and closing copy wrapped around the order lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    /// First line of the message.
    pub greeting: String,
    /// Confirmation prompt after the total.
    pub closing: String,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            greeting: "Olá Soso 💕! Quero comprar essas pulseirinhas:".to_owned(),
            closing: "Pode me confirmar o pedido?".to_owned(),
        }
    }
}

/// Render the order summary for a cart.
///
/// Returns `None` for an empty cart - checkout must be refused outright,
/// with no message built and no hand-off attempted. For a non-empty cart the
/// message has this exact shape:
///
/// ```text
/// <greeting>
///
/// 1. <name> (<quantity>x) - R$ <line subtotal>
/// ...one line per cart line, in cart order...
///
/// Total: R$ <total>
///
/// <closing>
/// ```
#[must_use]
pub fn order_message(cart: &Cart, template: &MessageTemplate) -> Option<String> {
    if cart.is_empty() {
        return None;
    }

    let mut message = format!("{}\n\n", template.greeting);

    for (index, line) in cart.lines().iter().enumerate() {
        message.push_str(&format!(
            "{}. {} ({}x) - {}\n",
            index + 1,
            line.name,
            line.quantity,
            line.subtotal().display(),
        ));
    }

    message.push_str(&format!(
        "\nTotal: {}\n\n{}",
        cart.total().display(),
        template.closing,
    ));

    Some(message)
}

/// Build the WhatsApp deep link for a message.
///
/// Applies standard URI component encoding so newlines, spaces, and
/// punctuation survive transport. Pure: the same message and recipient
/// always yield the same URL.
#[must_use]
pub fn whatsapp_link(message: &str, recipient: &str) -> String {
    format!("https://wa.me/{recipient}?text={}", urlencoding::encode(message))
}
