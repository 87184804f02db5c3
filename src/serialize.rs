//! Contains custom deserialization functions for Steam's loosely typed inventory responses.

use std::str::FromStr;
use std::marker::PhantomData;
use std::fmt::{self, Display};
use serde::Deserialize;
use serde::de::{self, Visitor, Deserializer, Unexpected};

/// Deserializes a number which may be sent as either a JSON number or a numeric string.
pub fn string_or_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64>,
    T::Err: Display,
{
    struct NumericVisitor<T> {
        marker: PhantomData<T>,
    }
    
    impl<'de, T> Visitor<'de> for NumericVisitor<T>
    where
        T: FromStr + TryFrom<u64>,
        T::Err: Display,
    {
        type Value = T;
        
        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string")
        }
        
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            T::try_from(v)
                .map_err(|_e| de::Error::custom("Number too large to fit in target type"))
        }
        
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.parse::<T>().map_err(de::Error::custom)
        }
    }
    
    deserializer.deserialize_any(NumericVisitor { marker: PhantomData })
}

/// Deserializes an optional number sent as a string. Empty strings and nulls are `None`.
pub fn option_str_to_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64>,
    T::Err: Display,
{
    struct OptionVisitor<T> {
        marker: PhantomData<T>,
    }
    
    impl<'de, T> Visitor<'de> for OptionVisitor<T>
    where
        T: FromStr + TryFrom<u64>,
        T::Err: Display,
    {
        type Value = Option<T>;
        
        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number string")
        }
        
        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
        
        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
        
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            T::try_from(v)
                .map(Some)
                .map_err(|_e| de::Error::custom("Number too large to fit in target type"))
        }
        
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v.is_empty() {
                return Ok(None);
            }
            
            v.parse::<T>().map(Some).map_err(de::Error::custom)
        }
    }
    
    deserializer.deserialize_any(OptionVisitor { marker: PhantomData })
}

/// Deserializes a boolean which may be sent as `0`/`1`, `"0"`/`"1"` or `true`/`false`.
pub fn into_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct DeserializeBoolVisitor;
    
    impl<'de> Visitor<'de> for DeserializeBoolVisitor {
        type Value = bool;
        
        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("zero, one or a boolean")
        }
        
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(de::Error::invalid_value(
                    Unexpected::Unsigned(other),
                    &"zero or one",
                )),
            }
        }
        
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v {
                "0" => Ok(false),
                "1" => Ok(true),
                other => Err(de::Error::invalid_value(
                    Unexpected::Str(other),
                    &"zero or one",
                )),
            }
        }
        
        fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }
    }
    
    deserializer.deserialize_any(DeserializeBoolVisitor)
}

/// Deserializes an optional string where empty strings and nulls are `None`.
pub fn empty_string_is_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    
    Ok(s.filter(|s| !s.is_empty()))
}

/// Deserializes a sequence which may also be sent as `null`.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
