use crate::core::render::{ATTR_ADDR, ATTR_TYPE};
use crate::domain::model::{ItemElement, SelectionEvent};
use crate::utils::error::{Result, SearchError};

/// Notification text for a confirmed suggestion. Anything other than a
/// `keydown` counts as a mouse click.
pub fn selection_message(event: &SelectionEvent, item: &ItemElement) -> Result<String> {
    let addr = required_attribute(item, ATTR_ADDR)?;
    let kind = required_attribute(item, ATTR_TYPE)?;
    let via = match event {
        SelectionEvent::KeyDown => "pressing enter",
        _ => "mouse click",
    };

    Ok(format!("Item \"{} ({})\" selected by {}.", addr, kind, via))
}

fn required_attribute<'a>(item: &'a ItemElement, name: &str) -> Result<&'a str> {
    item.attribute(name)
        .ok_or_else(|| SearchError::MissingAttribute {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn torsgatan() -> ItemElement {
        ItemElement::new()
            .with_attribute(ATTR_ADDR, "Torsgatan 7")
            .with_attribute(ATTR_TYPE, "g")
    }

    #[test]
    fn test_keydown_is_enter() {
        assert_eq!(
            selection_message(&SelectionEvent::KeyDown, &torsgatan()).unwrap(),
            "Item \"Torsgatan 7 (g)\" selected by pressing enter."
        );
    }

    #[test]
    fn test_other_events_are_clicks() {
        for event in [
            SelectionEvent::Click,
            SelectionEvent::from_event_type("mousedown"),
        ] {
            assert_eq!(
                selection_message(&event, &torsgatan()).unwrap(),
                "Item \"Torsgatan 7 (g)\" selected by mouse click."
            );
        }
    }

    #[test]
    fn test_missing_attribute() {
        let item = ItemElement::new().with_attribute(ATTR_ADDR, "Torsgatan 7");
        assert!(matches!(
            selection_message(&SelectionEvent::Click, &item),
            Err(SearchError::MissingAttribute { ref name }) if name == ATTR_TYPE
        ));
    }
}
