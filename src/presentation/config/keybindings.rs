use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// User-triggerable actions that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    Quit,
    Suspend,
    ToggleFullscreen,
    ToggleInfo,
    CloseInfo,
}

/// Flat mapping from key sequences to actions
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_sequence(&key_str)
                    .map(|keys| (keys, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        if let Some(rest) = current.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            current = rest;
        } else {
            break;
        }
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "f1" => KeyCode::F(1),
        "f2" => KeyCode::F(2),
        "f3" => KeyCode::F(3),
        "f4" => KeyCode::F(4),
        "f5" => KeyCode::F(5),
        "f6" => KeyCode::F(6),
        "f7" => KeyCode::F(7),
        "f8" => KeyCode::F(8),
        "f9" => KeyCode::F(9),
        "f10" => KeyCode::F(10),
        "f11" => KeyCode::F(11),
        "f12" => KeyCode::F(12),
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        "tab" => KeyCode::Tab,
        c if c.chars().count() == 1 => {
            let mut chars = c.chars();
            let Some(mut c) = chars.next() else {
                return Err(format!("Unable to parse {raw}"));
            };
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

/// Parse a key sequence such as `<q>`, `<Ctrl-c>` or `<g><g>`.
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| format!("Unable to parse `{raw}`"))?;

    inner.split("><").map(parse_key_event).collect()
}

pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let code = match key_event.code {
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "backtab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "esc".to_string(),
        _ => "".to_string(),
    };

    let mut modifiers = Vec::with_capacity(3);
    if key_event.modifiers.intersects(KeyModifiers::CONTROL) {
        modifiers.push("ctrl");
    }
    if key_event.modifiers.intersects(KeyModifiers::SHIFT) {
        modifiers.push("shift");
    }
    if key_event.modifiers.intersects(KeyModifiers::ALT) {
        modifiers.push("alt");
    }

    let mut key = modifiers.join("-");
    if !key.is_empty() {
        key.push('-');
    }
    key.push_str(&code);

    key
}

impl KeyBindings {
    /// First key bound to `action`, rendered for hints such as `f`
    pub fn hint_for(&self, action: Action) -> Option<String> {
        let mut hints: Vec<String> = self
            .iter()
            .filter(|(_, a)| **a == action)
            .filter_map(|(keys, _)| keys.first().map(key_event_to_string))
            .collect();
        hints.sort_by_key(|h| (h.len(), h.clone()));
        hints.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("<q>", KeyCode::Char('q'), KeyModifiers::NONE)]
    #[case("<f>", KeyCode::Char('f'), KeyModifiers::NONE)]
    #[case("<Esc>", KeyCode::Esc, KeyModifiers::NONE)]
    #[case("<Ctrl-c>", KeyCode::Char('c'), KeyModifiers::CONTROL)]
    #[case("<ctrl-alt-z>", KeyCode::Char('z'), KeyModifiers::CONTROL.union(KeyModifiers::ALT))]
    #[case("<shift-i>", KeyCode::Char('I'), KeyModifiers::SHIFT)]
    #[case("<F11>", KeyCode::F(11), KeyModifiers::NONE)]
    #[case("<space>", KeyCode::Char(' '), KeyModifiers::NONE)]
    fn test_parse_single_key(
        #[case] raw: &str,
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
    ) {
        assert_eq!(
            parse_key_sequence(raw),
            Ok(vec![KeyEvent::new(code, modifiers)])
        );
    }

    #[test]
    fn test_parse_multiple_keys() {
        assert_eq!(
            parse_key_sequence("<g><g>"),
            Ok(vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            ])
        );
    }

    #[rstest]
    #[case("q")]
    #[case("<q")]
    #[case("<unknown>")]
    #[case("<ctrl->")]
    fn test_parse_invalid(#[case] raw: &str) {
        assert!(parse_key_sequence(raw).is_err());
    }

    #[test]
    fn test_key_event_to_string() {
        assert_eq!(
            key_event_to_string(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            "ctrl-c"
        );
        assert_eq!(
            key_event_to_string(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            "esc"
        );
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_deserialize_keybindings() {
        let raw = r#"{ "<f>": "ToggleFullscreen", "<i>": "ToggleInfo", "<Esc>": "CloseInfo" }"#;
        let bindings: KeyBindings = json5::from_str(raw).unwrap();

        assert_eq!(
            bindings.get(&vec![KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE)]),
            Some(&Action::ToggleFullscreen)
        );
        assert_eq!(
            bindings.get(&vec![KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)]),
            Some(&Action::CloseInfo)
        );
        assert_eq!(bindings.hint_for(Action::ToggleInfo), Some("i".to_string()));
        assert_eq!(bindings.hint_for(Action::Quit), None);
    }

    #[test]
    fn test_deserialize_rejects_bad_keys() {
        let raw = r#"{ "<nope>": "Quit" }"#;
        assert!(json5::from_str::<KeyBindings>(raw).is_err());
    }
}
