//! Hand-off of the cart to an external phone call or WhatsApp chat.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Characters left readable in the pre-filled WhatsApp message.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b',');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLinks {
    pub phone: String,
    pub whatsapp_number: String,
    pub message: String,
}

impl OrderLinks {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            phone: config.phone.clone(),
            whatsapp_number: config.whatsapp_number.clone(),
            message: config.order_message.clone(),
        }
    }

    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn whatsapp_uri(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.whatsapp_number,
            utf8_percent_encode(&self.message, MESSAGE_ENCODE_SET)
        )
    }
}

pub fn cart_toast(count: u32) -> String {
    format!("Panier mis à jour ({} articles)", count)
}

pub fn modal_summary(count: u32) -> String {
    format!("Vous avez {} article(s) dans votre panier", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_links() {
        let links = OrderLinks::from_config(&SiteConfig::default());
        assert_eq!(links.tel_uri(), "tel:0555219684");
        assert_eq!(
            links.whatsapp_uri(),
            "https://wa.me/213555219684?text=Bonjour,%20je%20souhaite%20passer%20une%20commande."
        );
    }

    #[test]
    fn test_message_encoding_escapes_non_ascii() {
        let links = OrderLinks {
            phone: String::new(),
            whatsapp_number: "1".into(),
            message: "Café & frites?".into(),
        };
        assert_eq!(
            links.whatsapp_uri(),
            "https://wa.me/1?text=Caf%C3%A9%20%26%20frites%3F"
        );
    }

    #[test]
    fn test_cart_messages() {
        assert_eq!(cart_toast(3), "Panier mis à jour (3 articles)");
        assert_eq!(modal_summary(1), "Vous avez 1 article(s) dans votre panier");
    }
}
