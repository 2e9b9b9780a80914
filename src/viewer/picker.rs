use crate::models::substrate::Manifest;
use serde::Serialize;

/// Radio group name shared by every control, across all headings.
pub const RADIO_GROUP: &str = "substrates";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickerControl {
    pub key: String,
    pub name: &'static str,
    pub text: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickerGroup {
    pub heading: String,
    pub controls: Vec<PickerControl>,
}

/// The substrate picker: one labelled group per heading.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Picker {
    pub groups: Vec<PickerGroup>,
}

impl Picker {
    /// Builds the picker with the very first control checked.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut first = true;
        let groups = manifest
            .headings
            .iter()
            .map(|heading| PickerGroup {
                heading: heading.heading.clone(),
                controls: heading
                    .items
                    .iter()
                    .map(|item| {
                        let checked = std::mem::take(&mut first);
                        PickerControl {
                            key: item.key.clone(),
                            name: RADIO_GROUP,
                            text: format!(" {}", item.label),
                            checked,
                        }
                    })
                    .collect(),
            })
            .collect();
        Picker { groups }
    }

    pub fn controls(&self) -> impl Iterator<Item = &PickerControl> {
        self.groups.iter().flat_map(|g| g.controls.iter())
    }

    pub fn checked_key(&self) -> Option<&str> {
        self.controls().find(|c| c.checked).map(|c| c.key.as_str())
    }

    /// Moves the check mark to `key`. Returns false for unknown keys.
    pub fn check(&mut self, key: &str) -> bool {
        if !self.controls().any(|c| c.key == key) {
            return false;
        }
        for control in self.groups.iter_mut().flat_map(|g| g.controls.iter_mut()) {
            control.checked = control.key == key;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> Manifest {
        Manifest::from_json(
            "m",
            br#"[
                {"heading": "Empty", "items": []},
                {"heading": "A", "items": [
                    {"key": "x", "label": "X", "unit": "u1"},
                    {"key": "y", "label": "Y", "unit": "u2"}]},
                {"heading": "B", "items": [
                    {"key": "z", "label": "Z", "unit": "u3"}]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_first_control_across_headings_is_checked() {
        let picker = Picker::from_manifest(&manifest());
        assert_eq!(picker.groups.len(), 3);
        assert!(picker.groups[0].controls.is_empty());
        assert_eq!(picker.checked_key(), Some("x"));
        assert_eq!(picker.controls().filter(|c| c.checked).count(), 1);
    }

    #[test]
    fn test_controls_share_one_radio_group() {
        let picker = Picker::from_manifest(&manifest());
        assert!(picker.controls().all(|c| c.name == RADIO_GROUP));
        let texts: Vec<&str> = picker.controls().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec![" X", " Y", " Z"]);
    }

    #[test]
    fn test_check_moves_selection() {
        let mut picker = Picker::from_manifest(&manifest());
        assert!(picker.check("z"));
        assert_eq!(picker.checked_key(), Some("z"));
        assert_eq!(picker.controls().filter(|c| c.checked).count(), 1);
        assert!(!picker.check("nope"));
        assert_eq!(picker.checked_key(), Some("z"));
    }

    #[test]
    fn test_empty_manifest_has_no_controls() {
        let picker = Picker::from_manifest(&Manifest::default());
        assert!(picker.groups.is_empty());
        assert_eq!(picker.checked_key(), None);
    }
}
