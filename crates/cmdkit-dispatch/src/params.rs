//! Parameter views handed to command handlers.

use std::fmt;
use std::str::FromStr;

/// A value converted from a parameter's text.
///
/// `value` is only meaningful when `result` is true; after a failed
/// conversion it holds `T::default()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub result: bool,
}

impl<T: Default> Parsed<T> {
    fn from_result<E>(res: Result<T, E>) -> Self {
        match res {
            Ok(value) => Self::success(value),
            Err(_) => Self::failed(),
        }
    }

    fn failed() -> Self {
        Self {
            value: T::default(),
            result: false,
        }
    }
}

impl<T> Parsed<T> {
    fn success(value: T) -> Self {
        Self {
            value,
            result: true,
        }
    }

    /// The converted value, or `None` if the conversion failed.
    pub fn ok(self) -> Option<T> {
        if self.result { Some(self.value) } else { None }
    }
}

/// A single raw command-line parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'a> {
    text: &'a str,
}

impl<'a> Param<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// The parameter exactly as it appeared on the command line.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Parse the whole parameter as a signed 64-bit integer.
    pub fn as_int(&self) -> Parsed<i64> {
        parse_full(self.text)
    }

    /// Parse the whole parameter as a 64-bit float.
    pub fn as_real(&self) -> Parsed<f64> {
        parse_full(self.text)
    }

    /// Parse the parameter as a boolean.
    ///
    /// Accepts `1` and `0` as well as `true` and `false` in any ASCII case.
    pub fn as_bool(&self) -> Parsed<bool> {
        match self.text {
            "1" => Parsed::success(true),
            "0" => Parsed::success(false),
            t if t.eq_ignore_ascii_case("true") => Parsed::success(true),
            t if t.eq_ignore_ascii_case("false") => Parsed::success(false),
            _ => Parsed::failed(),
        }
    }
}

// `str::parse` is locale-independent and rejects trailing garbage and
// out-of-range values, which is exactly the full-text contract.
fn parse_full<T: FromStr + Default>(text: &str) -> Parsed<T> {
    Parsed::from_result(text.parse::<T>())
}

impl AsRef<str> for Param<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

impl fmt::Display for Param<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Read-only view over the parameters of one command invocation.
///
/// The view borrows from the processor's argument vector and never outlives
/// the handler call it was built for.
#[derive(Debug, Clone, Copy)]
pub struct Params<'a> {
    params: &'a [&'a str],
}

impl<'a> Params<'a> {
    pub fn new(params: &'a [&'a str]) -> Self {
        Self { params }
    }

    /// A view with no parameters.
    pub fn empty() -> Self {
        Self { params: &[] }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The parameter at `i`, or `None` when `i` is out of range.
    pub fn get(&self, i: usize) -> Option<Param<'a>> {
        self.params.get(i).map(|&text| Param::new(text))
    }

    pub fn iter(self) -> impl Iterator<Item = Param<'a>> {
        self.params.iter().map(|&text| Param::new(text))
    }

    /// The raw parameter strings.
    pub fn as_slice(&self) -> &'a [&'a str] {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_parses() {
        let p = Param::new("13");
        assert_eq!(
            p.as_int(),
            Parsed {
                value: 13,
                result: true
            }
        );
        assert_eq!(Param::new("-42").as_int().ok(), Some(-42));
    }

    #[test]
    fn int_rejects_non_numeric() {
        assert!(!Param::new("abc").as_int().result);
        assert!(!Param::new("").as_int().result);
        assert!(!Param::new("12abc").as_int().result);
        assert!(!Param::new("1.5").as_int().result);
    }

    #[test]
    fn int_overflow_fails() {
        assert!(Param::new("9223372036854775807").as_int().result);
        assert!(!Param::new("9223372036854775808").as_int().result);
    }

    #[test]
    fn real_parses() {
        assert_eq!(Param::new("2.5").as_real().ok(), Some(2.5));
        assert_eq!(Param::new("-1e3").as_real().ok(), Some(-1000.0));
        assert_eq!(Param::new("7").as_real().ok(), Some(7.0));
    }

    #[test]
    fn real_is_locale_independent() {
        assert!(!Param::new("2,5").as_real().result);
    }

    #[test]
    fn real_rejects_non_numeric() {
        assert!(!Param::new("abc").as_real().result);
    }

    #[test]
    fn bool_parses() {
        assert_eq!(Param::new("1").as_bool().ok(), Some(true));
        assert_eq!(Param::new("0").as_bool().ok(), Some(false));
        assert_eq!(Param::new("true").as_bool().ok(), Some(true));
        assert_eq!(Param::new("FALSE").as_bool().ok(), Some(false));
    }

    #[test]
    fn bool_rejects_other_text() {
        assert!(!Param::new("abc").as_bool().result);
        assert!(!Param::new("2").as_bool().result);
        assert!(!Param::new("yes").as_bool().result);
    }

    #[test]
    fn failed_parse_has_default_value() {
        let p = Param::new("abc").as_int();
        assert_eq!(p.value, 0);
        assert_eq!(p.ok(), None);
    }

    #[test]
    fn params_index_in_range() {
        let raw = ["13", "15"];
        let params = Params::new(&raw);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get(0).unwrap().as_str(), "13");
        assert_eq!(params.get(1).unwrap().as_str(), "15");
    }

    #[test]
    fn params_out_of_range_is_none() {
        let raw = ["only"];
        let params = Params::new(&raw);
        assert!(params.get(1).is_none());
        assert!(params.get(usize::MAX).is_none());
        assert!(Params::empty().get(0).is_none());
        assert!(Params::empty().is_empty());
    }

    #[test]
    fn params_iter_in_order() {
        let raw = ["a", "b", "c"];
        let joined: Vec<String> = Params::new(&raw).iter().map(|p| p.to_string()).collect();
        assert_eq!(joined, vec!["a", "b", "c"]);
    }
}
