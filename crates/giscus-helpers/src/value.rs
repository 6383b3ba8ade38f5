//! Emptiness checks for loosely typed values

/// Values that can be "empty" in the sense used by form and config handling:
/// absent, null, the empty string, or NaN. Zero and `false` are not empty.
pub trait IsEmpty {
    fn is_empty_value(&self) -> bool;
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for f64 {
    fn is_empty_value(&self) -> bool {
        self.is_nan()
    }
}

impl IsEmpty for f32 {
    fn is_empty_value(&self) -> bool {
        self.is_nan()
    }
}

impl IsEmpty for bool {
    fn is_empty_value(&self) -> bool {
        false
    }
}

macro_rules! never_empty {
    ($($ty:ty),*) => {
        $(
            impl IsEmpty for $ty {
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_empty!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        match self {
            None => true,
            Some(value) => value.is_empty_value(),
        }
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl IsEmpty for serde_json::Value {
    fn is_empty_value(&self) -> bool {
        match self {
            serde_json::Value::Null => true,
            serde_json::Value::String(s) => s.is_empty(),
            serde_json::Value::Number(n) => n.as_f64().is_some_and(f64::is_nan),
            _ => false,
        }
    }
}

/// Check whether a value is null, absent, an empty string or NaN
pub fn is_empty<T: IsEmpty + ?Sized>(value: &T) -> bool {
    value.is_empty_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers() {
        assert!(!is_empty(&0));
        assert!(!is_empty(&0.0_f64));
        assert!(is_empty(&f64::NAN));
        assert!(is_empty(&f32::NAN));
    }

    #[test]
    fn test_strings() {
        assert!(is_empty(""));
        assert!(is_empty(&String::new()));
        assert!(!is_empty(" "));
        assert!(!is_empty("0"));
    }

    #[test]
    fn test_bool_is_never_empty() {
        assert!(!is_empty(&false));
        assert!(!is_empty(&true));
    }

    #[test]
    fn test_options() {
        assert!(is_empty(&None::<i32>));
        assert!(!is_empty(&Some(0)));
        assert!(is_empty(&Some(f64::NAN)));
        assert!(is_empty(&Some("")));
    }

    #[test]
    fn test_json_values() {
        assert!(is_empty(&json!(null)));
        assert!(is_empty(&json!("")));
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(false)));
        assert!(!is_empty(&json!([])));
        assert!(!is_empty(&json!({})));
    }
}
