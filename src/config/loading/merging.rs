use toml::{Value, map::Map};

/// Merges imported configs in order, then the main config on top
pub fn merge_toml_configs(imports: Vec<Value>, main: Value) -> Value {
    let mut accumulated = Value::Table(Map::new());

    for import in imports {
        accumulated = merge_two_toml_configs(accumulated, import);
    }

    merge_two_toml_configs(accumulated, main)
}

/// Deep merges two TOML values; `overlay` wins, tables merge key by key
pub fn merge_two_toml_configs(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            let mut merged_table = overlay_table;

            for (key, base_value) in base_table {
                match merged_table.remove(&key) {
                    None => {
                        merged_table.insert(key, base_value);
                    }
                    Some(overlay_value) => {
                        let merged_value = merge_two_toml_configs(base_value, overlay_value);
                        merged_table.insert(key, merged_value);
                    }
                }
            }

            Value::Table(merged_table)
        }
        (_, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn parse(s: &str) -> Value {
        toml::from_str(s).unwrap()
    }

    #[test]
    fn overlay_wins_on_scalar_conflict() {
        let merged = merge_two_toml_configs(
            parse("[styling]\nbackground = \"red\""),
            parse("[styling]\nbackground = \"blue\""),
        );
        assert_eq!(merged["styling"]["background"].as_str(), Some("blue"));
    }

    #[test]
    fn keeps_base_keys_missing_from_overlay() {
        let merged = merge_two_toml_configs(
            parse("[panel]\nheight = 40\ntitle = \"Bar\""),
            parse("[panel]\nheight = 32"),
        );
        assert_eq!(merged["panel"]["height"].as_integer(), Some(32));
        assert_eq!(merged["panel"]["title"].as_str(), Some("Bar"));
    }

    #[test]
    fn later_imports_override_earlier_ones() {
        let merged = merge_toml_configs(
            vec![
                parse("[styling]\nfont_size = 10"),
                parse("[styling]\nfont_size = 12"),
            ],
            parse("[panel]\nheight = 20"),
        );
        assert_eq!(merged["styling"]["font_size"].as_integer(), Some(12));
        assert_eq!(merged["panel"]["height"].as_integer(), Some(20));
    }
}
