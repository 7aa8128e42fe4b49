use crate::core::constants::element_tags;
use crate::core::types::{ComponentCategory, ComponentRecord, ComponentType};

/// Generates illustrative TSX scaffolds for documented components.
///
/// The element tag comes from a fixed type lookup and is used for both the
/// opening and the closing tag, so even void elements like `input` are
/// closed. The prop block is derived from category and variants only and is
/// independent of the chosen tag.
pub struct ScaffoldGenerator;

impl ScaffoldGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Derive a TypeScript identifier from a component name.
    ///
    /// Non-alphanumerics split words, each word gets a leading capital:
    /// "Button/Primary" becomes "ButtonPrimary".
    pub fn identifier(name: &str) -> String {
        name.split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect()
    }

    fn element_tag(component_type: ComponentType) -> &'static str {
        match component_type {
            ComponentType::Button => element_tags::BUTTON,
            ComponentType::Input => element_tags::INPUT,
            ComponentType::Card => element_tags::DIV,
            ComponentType::Modal => element_tags::DIV,
            ComponentType::Navigation => element_tags::NAV,
            ComponentType::Icon => element_tags::SPAN,
            ComponentType::Component => element_tags::DIV,
        }
    }

    /// Render the scaffold source for one component
    pub fn generate(&self, record: &ComponentRecord) -> String {
        let ident = Self::identifier(&record.name);
        let tag = Self::element_tag(record.component_type);

        let mut lines = Vec::new();

        lines.push(format!("interface {}Props {{", ident));
        lines.push("  children?: React.ReactNode;".to_string());
        lines.push("  className?: string;".to_string());
        if record.variants.len() > 1 {
            let union = record
                .variants
                .iter()
                .map(|variant| format!("'{}'", variant))
                .collect::<Vec<_>>()
                .join(" | ");
            lines.push(format!("  variant?: {};", union));
        }
        if record.category == ComponentCategory::Ui {
            lines.push("  disabled?: boolean;".to_string());
            lines.push("  onClick?: () => void;".to_string());
        }
        lines.push("}".to_string());
        lines.push(String::new());
        lines.push(format!(
            "export function {}({{ children, className }}: {}Props) {{",
            ident, ident
        ));
        lines.push("  return (".to_string());
        lines.push(format!(
            "    <{} className={{className}}>{{children}}</{}>",
            tag, tag
        ));
        lines.push("  );".to_string());
        lines.push("}".to_string());

        lines.join("\n")
    }
}

impl Default for ScaffoldGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::component_classification::ComponentClassifier;
    use crate::core::types::RawComponent;

    fn create_test_record(name: &str, variants: &[&str]) -> ComponentRecord {
        let raw = RawComponent {
            name: name.to_string(),
            variants: Some(variants.iter().map(|v| v.to_string()).collect()),
            ..Default::default()
        };
        ComponentClassifier::new().classify(&raw)
    }

    #[test]
    fn test_identifier_strips_and_capitalizes() {
        assert_eq!(ScaffoldGenerator::identifier("Button/Primary"), "ButtonPrimary");
        assert_eq!(ScaffoldGenerator::identifier("nav bar (main)"), "NavBarMain");
        assert_eq!(ScaffoldGenerator::identifier("card_2x"), "Card2x");
    }

    #[test]
    fn test_multi_variant_ui_component_scaffold() {
        let generator = ScaffoldGenerator::new();
        let record = create_test_record("Button/Primary", &["default", "loading", "disabled"]);
        let scaffold = generator.generate(&record);

        assert!(scaffold.contains("interface ButtonPrimaryProps {"));
        assert!(scaffold.contains("variant?: 'default' | 'loading' | 'disabled';"));
        assert!(scaffold.contains("disabled?: boolean;"));
        assert!(scaffold.contains("onClick?: () => void;"));
        assert!(scaffold.contains("<button className={className}>{children}</button>"));
    }

    #[test]
    fn test_single_variant_has_no_union() {
        let generator = ScaffoldGenerator::new();
        let record = create_test_record("Card/Content", &["default"]);
        let scaffold = generator.generate(&record);

        assert!(!scaffold.contains("variant?:"));
        assert!(scaffold.contains("children?: React.ReactNode;"));
        assert!(scaffold.contains("className?: string;"));
    }

    #[test]
    fn test_icon_component_gets_no_interaction_props() {
        let generator = ScaffoldGenerator::new();
        let record = create_test_record("lucide/earth", &["default"]);
        let scaffold = generator.generate(&record);

        assert!(!scaffold.contains("disabled?:"));
        assert!(!scaffold.contains("onClick?:"));
        assert!(scaffold.contains("<span className={className}>{children}</span>"));
    }

    #[test]
    fn test_input_scaffold_carries_closing_tag() {
        let generator = ScaffoldGenerator::new();
        let record = create_test_record("Input/Text Field", &["default"]);
        let scaffold = generator.generate(&record);

        assert!(scaffold.contains("<input className={className}>{children}</input>"));
    }

    #[test]
    fn test_navigation_uses_nav_tag_with_ui_props() {
        let generator = ScaffoldGenerator::new();
        let record = create_test_record("Navigation/Menu", &["default"]);
        let scaffold = generator.generate(&record);

        // props follow the ui category even though the tag is nav
        assert!(scaffold.contains("<nav className={className}>{children}</nav>"));
        assert!(scaffold.contains("disabled?: boolean;"));
    }
}
