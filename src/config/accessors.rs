//! Typed accessors over the resolved configuration
//!
//! The parsing lives on [`Snapshot`], so a caller reading several keys can
//! resolve once and see a single consistent configuration. The same methods
//! on [`ConfigStore`] resolve the current snapshot for a one-off read.
//!
//! Every accessor takes a default as `impl Into<Option<T>>`: pass a value to
//! fall back on when the key is absent, or `None` to make the key required.
//!
//! Parse policy differs by type and must stay that way:
//! - colors with the wrong number of channels log a warning and fall back to the default
//! - every other parse failure is returned as [`ConfigError::Malformed`]

use tracing::warn;

use super::error::ConfigError;
use super::store::{ConfigStore, Snapshot};
use crate::common::color::{ColorParseError, Rgba};

fn missing(key: &str) -> ConfigError {
    ConfigError::MissingKey {
        key: key.to_string(),
    }
}

/// Split a list value on `divider`, trimming every element.
///
/// An empty value is one empty element. Trailing empty segments of a
/// non-empty value are dropped, so `"a,b,,"` has two elements. An empty
/// divider leaves the value unsplit.
fn split_list<'a>(raw: &'a str, divider: &str) -> Vec<&'a str> {
    if raw.is_empty() || divider.is_empty() {
        return vec![raw.trim()];
    }

    let mut parts: Vec<&str> = raw.split(divider).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts.into_iter().map(str::trim).collect()
}

impl Snapshot {
    /// Look up `key` and run `parse` on its raw value, or apply the missing-key policy
    fn lookup<T>(
        &self,
        key: &str,
        default: Option<T>,
        parse: impl FnOnce(&str) -> Result<T, ConfigError>,
    ) -> Result<T, ConfigError> {
        match self.get(key) {
            Some(raw) => parse(raw),
            None => default.ok_or_else(|| missing(key)),
        }
    }

    pub fn get_string<'a>(
        &self,
        key: &str,
        default: impl Into<Option<&'a str>>,
    ) -> Result<String, ConfigError> {
        self.lookup(key, default.into().map(str::to_string), |raw| {
            Ok(raw.to_string())
        })
    }

    pub fn get_int(&self, key: &str, default: impl Into<Option<i32>>) -> Result<i32, ConfigError> {
        self.lookup(key, default.into(), |raw| {
            raw.parse()
                .map_err(|e| ConfigError::malformed(key, raw, "integer", e))
        })
    }

    pub fn get_long(&self, key: &str, default: impl Into<Option<i64>>) -> Result<i64, ConfigError> {
        self.lookup(key, default.into(), |raw| {
            raw.parse()
                .map_err(|e| ConfigError::malformed(key, raw, "long integer", e))
        })
    }

    /// Surrounding whitespace is ignored for floats only
    pub fn get_float(
        &self,
        key: &str,
        default: impl Into<Option<f32>>,
    ) -> Result<f32, ConfigError> {
        self.lookup(key, default.into(), |raw| {
            raw.trim()
                .parse()
                .map_err(|e| ConfigError::malformed(key, raw, "float", e))
        })
    }

    /// `true`/`false`, case-insensitive; anything else is malformed
    pub fn get_bool(&self, key: &str, default: impl Into<Option<bool>>) -> Result<bool, ConfigError> {
        self.lookup(key, default.into(), |raw| {
            if raw.eq_ignore_ascii_case("true") {
                Ok(true)
            } else if raw.eq_ignore_ascii_case("false") {
                Ok(false)
            } else {
                Err(ConfigError::malformed(
                    key,
                    raw,
                    "boolean",
                    "expected 'true' or 'false'",
                ))
            }
        })
    }

    /// `R,G,B,A` color.
    ///
    /// A value with the wrong channel count is logged and replaced by the
    /// default; existing user files are known to contain such values. A bad
    /// channel in an otherwise well-formed value is an error.
    pub fn get_color(
        &self,
        key: &str,
        default: impl Into<Option<Rgba>>,
    ) -> Result<Rgba, ConfigError> {
        let default = default.into();
        let Some(raw) = self.get(key) else {
            return default.ok_or_else(|| missing(key));
        };

        match Rgba::parse_channels(raw) {
            Ok(color) => Ok(color),
            Err(ColorParseError::Arity(channels)) => {
                warn!(key, value = raw, channels, "Invalid color, using default");
                default.ok_or_else(|| {
                    ConfigError::malformed(key, raw, "color", ColorParseError::Arity(channels))
                })
            }
            Err(e) => Err(ConfigError::malformed(key, raw, "color", e)),
        }
    }

    pub fn get_string_list(
        &self,
        key: &str,
        default: impl Into<Option<Vec<String>>>,
        divider: &str,
    ) -> Result<Vec<String>, ConfigError> {
        self.lookup(key, default.into(), |raw| {
            Ok(split_list(raw, divider)
                .into_iter()
                .map(str::to_string)
                .collect())
        })
    }

    pub fn get_int_list(
        &self,
        key: &str,
        default: impl Into<Option<Vec<i32>>>,
        divider: &str,
    ) -> Result<Vec<i32>, ConfigError> {
        self.lookup(key, default.into(), |raw| {
            split_list(raw, divider)
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    item.parse().map_err(|e| {
                        ConfigError::malformed(
                            key,
                            raw,
                            "integer list",
                            format!("element {index} ('{item}'): {e}"),
                        )
                    })
                })
                .collect()
        })
    }

    pub fn get_double_list(
        &self,
        key: &str,
        default: impl Into<Option<Vec<f64>>>,
        divider: &str,
    ) -> Result<Vec<f64>, ConfigError> {
        self.lookup(key, default.into(), |raw| {
            split_list(raw, divider)
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    item.parse().map_err(|e| {
                        ConfigError::malformed(
                            key,
                            raw,
                            "number list",
                            format!("element {index} ('{item}'): {e}"),
                        )
                    })
                })
                .collect()
        })
    }
}

/// One-off reads against the current snapshot
impl ConfigStore {
    pub fn get_string<'a>(
        &self,
        key: &str,
        default: impl Into<Option<&'a str>>,
    ) -> Result<String, ConfigError> {
        self.resolve()?.get_string(key, default)
    }

    pub fn get_int(&self, key: &str, default: impl Into<Option<i32>>) -> Result<i32, ConfigError> {
        self.resolve()?.get_int(key, default)
    }

    pub fn get_long(&self, key: &str, default: impl Into<Option<i64>>) -> Result<i64, ConfigError> {
        self.resolve()?.get_long(key, default)
    }

    pub fn get_float(
        &self,
        key: &str,
        default: impl Into<Option<f32>>,
    ) -> Result<f32, ConfigError> {
        self.resolve()?.get_float(key, default)
    }

    pub fn get_bool(&self, key: &str, default: impl Into<Option<bool>>) -> Result<bool, ConfigError> {
        self.resolve()?.get_bool(key, default)
    }

    pub fn get_color(
        &self,
        key: &str,
        default: impl Into<Option<Rgba>>,
    ) -> Result<Rgba, ConfigError> {
        self.resolve()?.get_color(key, default)
    }

    pub fn get_string_list(
        &self,
        key: &str,
        default: impl Into<Option<Vec<String>>>,
        divider: &str,
    ) -> Result<Vec<String>, ConfigError> {
        self.resolve()?.get_string_list(key, default, divider)
    }

    pub fn get_int_list(
        &self,
        key: &str,
        default: impl Into<Option<Vec<i32>>>,
        divider: &str,
    ) -> Result<Vec<i32>, ConfigError> {
        self.resolve()?.get_int_list(key, default, divider)
    }

    pub fn get_double_list(
        &self,
        key: &str,
        default: impl Into<Option<Vec<f64>>>,
        divider: &str,
    ) -> Result<Vec<f64>, ConfigError> {
        self.resolve()?.get_double_list(key, default, divider)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::config::test_support::store_with;

    #[test]
    fn test_scalars_from_bundled_layer() {
        let (_dir, store) = store_with(
            "s=hello\ni=-42\nl=9000000000\nf=1.5\nb1=TRUE\nb2=false\n",
        );
        assert_eq!(store.get_string("s", "x").unwrap(), "hello");
        assert_eq!(store.get_int("i", 0).unwrap(), -42);
        assert_eq!(store.get_long("l", 0_i64).unwrap(), 9_000_000_000);
        assert_eq!(store.get_float("f", 0.0_f32).unwrap(), 1.5);
        assert!(store.get_bool("b1", false).unwrap());
        assert!(!store.get_bool("b2", true).unwrap());
    }

    #[test]
    fn test_value_from_override_layer() {
        let (_dir, store) = store_with("baloon.width=400\n");
        let path = store.sources().override_path.clone();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "baloon.width=720\n").unwrap();

        assert_eq!(store.get_int("baloon.width", 1).unwrap(), 720);
    }

    #[test]
    fn test_write_invalidate_read() {
        let (_dir, store) = store_with("baloon.height=100\n");
        assert_eq!(store.get_int("baloon.height", 0).unwrap(), 100);

        fs::write(&store.sources().override_path, "baloon.height=150\n").unwrap();
        assert_eq!(store.get_int("baloon.height", 0).unwrap(), 100);

        store.invalidate();
        assert_eq!(store.get_int("baloon.height", 0).unwrap(), 150);
    }

    #[test]
    fn test_missing_key_uses_default() {
        let (_dir, store) = store_with("");
        assert_eq!(store.get_string("nope", "fallback").unwrap(), "fallback");
        assert_eq!(store.get_int("nope", 7).unwrap(), 7);
        assert_eq!(store.get_long("nope", 8_i64).unwrap(), 8);
        assert_eq!(store.get_float("nope", 2.5_f32).unwrap(), 2.5);
        assert!(store.get_bool("nope", true).unwrap());
        assert_eq!(store.get_color("nope", Rgba::WHITE).unwrap(), Rgba::WHITE);
        assert_eq!(
            store.get_int_list("nope", vec![1_i32, 2], ",").unwrap(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_missing_required_key_is_deterministic() {
        let (_dir, store) = store_with("other=1\n");
        for _ in 0..3 {
            let err = store.get_string("waifu.name", None).unwrap_err();
            assert!(matches!(err, ConfigError::MissingKey { ref key } if key == "waifu.name"));
        }
        assert!(matches!(
            store.get_int("x", None),
            Err(ConfigError::MissingKey { .. })
        ));
        assert!(matches!(
            store.get_color("x", None),
            Err(ConfigError::MissingKey { .. })
        ));
        assert!(matches!(
            store.get_double_list("x", None, ","),
            Err(ConfigError::MissingKey { .. })
        ));
    }

    #[test]
    fn test_malformed_scalars_propagate() {
        let (_dir, store) = store_with("n=wide\nb=yes\nf=1.5.2\nspaced=15 \n");
        assert!(matches!(
            store.get_int("n", 400),
            Err(ConfigError::Malformed { expected: "integer", .. })
        ));
        assert!(matches!(
            store.get_long("n", 400_i64),
            Err(ConfigError::Malformed { .. })
        ));
        assert!(matches!(
            store.get_float("f", 1.0_f32),
            Err(ConfigError::Malformed { expected: "float", .. })
        ));
        assert!(matches!(
            store.get_bool("b", true),
            Err(ConfigError::Malformed { expected: "boolean", .. })
        ));
        // Integer and boolean values are not trimmed
        assert!(store.get_int("spaced", 0).is_err());
    }

    #[test]
    fn test_float_ignores_surrounding_whitespace() {
        let (_dir, store) = store_with("f= 1.5 \nf2=\t-0.25\n");
        assert_eq!(store.get_float("f", 0.0_f32).unwrap(), 1.5);
        assert_eq!(store.get_float("f2", 0.0_f32).unwrap(), -0.25);
    }

    #[test]
    fn test_snapshot_reads_survive_invalidation() {
        let (_dir, store) = store_with("baloon.width=400\nbaloon.height=100\n");
        let snapshot = store.resolve().unwrap();
        assert_eq!(snapshot.get_int("baloon.width", 0).unwrap(), 400);

        fs::write(
            &store.sources().override_path,
            "baloon.width=10\nbaloon.height=20\n",
        )
        .unwrap();
        store.invalidate();

        // Every read through the held snapshot sees the same configuration
        assert_eq!(snapshot.get_int("baloon.height", 0).unwrap(), 100);
        assert_eq!(store.get_int("baloon.height", 0).unwrap(), 20);
    }

    #[test]
    fn test_color_with_four_channels() {
        let (_dir, store) = store_with("x=10,20,30,255\ny= 1, 2 ,3,4\n");
        assert_eq!(
            store.get_color("x", Rgba::BLACK).unwrap(),
            Rgba::new(10, 20, 30, 255)
        );
        assert_eq!(
            store.get_color("y", Rgba::BLACK).unwrap(),
            Rgba::new(1, 2, 3, 4)
        );
    }

    #[test]
    fn test_color_wrong_arity_falls_back() {
        let (_dir, store) = store_with("x=10,20,30\ny=1,2,3,4,5\nz=\n");
        let default = Rgba::new(9, 9, 9, 9);
        assert_eq!(store.get_color("x", default).unwrap(), default);
        assert_eq!(store.get_color("y", default).unwrap(), default);
        assert_eq!(store.get_color("z", default).unwrap(), default);
        // Without a default there is nothing to fall back to
        assert!(matches!(
            store.get_color("x", None),
            Err(ConfigError::Malformed { expected: "color", .. })
        ));
    }

    #[test]
    fn test_color_bad_channel_propagates() {
        let (_dir, store) = store_with("x=10,20,blue,255\ny=0,0,0,300\n");
        assert!(store.get_color("x", Rgba::BLACK).is_err());
        assert!(store.get_color("y", Rgba::BLACK).is_err());
    }

    #[test]
    fn test_string_list_empty_value() {
        let (_dir, store) = store_with("x=\n");
        assert_eq!(
            store.get_string_list("x", None, ",").unwrap(),
            vec![String::new()]
        );
    }

    #[test]
    fn test_string_list_trims_and_drops_trailing_empties() {
        let (_dir, store) = store_with("x= a , b ,, c,,\ny=one|two\n");
        assert_eq!(
            store.get_string_list("x", None, ",").unwrap(),
            vec!["a", "b", "", "c"]
        );
        // The divider is literal text, not a pattern
        assert_eq!(
            store.get_string_list("y", None, "|").unwrap(),
            vec!["one", "two"]
        );
    }

    #[test]
    fn test_numeric_lists() {
        let (_dir, store) = store_with("ints=1, 2 ,3\ndoubles=0.5;1e3; -2\nbad=1,x,3\n");
        assert_eq!(store.get_int_list("ints", None, ",").unwrap(), vec![1, 2, 3]);
        assert_eq!(
            store.get_double_list("doubles", None, ";").unwrap(),
            vec![0.5, 1000.0, -2.0]
        );

        let err = store.get_int_list("bad", vec![0_i32], ",").unwrap_err();
        match err {
            ConfigError::Malformed { reason, .. } => assert!(reason.contains("element 1")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_error_reaches_accessors() {
        let (_dir, store) = store_with("x=1\n");
        fs::create_dir_all(&store.sources().override_path).unwrap();
        assert!(matches!(
            store.get_int("x", 0),
            Err(ConfigError::Load { .. })
        ));
    }

    #[test]
    fn test_split_list_edge_cases() {
        assert_eq!(split_list("", ","), vec![""]);
        assert_eq!(split_list(",,", ","), Vec::<&str>::new());
        assert_eq!(split_list("a", ","), vec!["a"]);
        assert_eq!(split_list("a::b", "::"), vec!["a", "b"]);
        assert_eq!(split_list(" a,b ", ""), vec!["a,b"]);
    }
}
