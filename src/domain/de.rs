// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deserialization of resolved records into caller types.
//!
//! A [`Record`] can be mapped onto any type implementing `serde::Deserialize`.
//! Groups become maps, leaves become their scalar, and optional leaves that
//! resolved to nothing are left out so that `Option` fields come back as `None`.

use crate::domain::config_value::{ConfigValue, Record};
use crate::domain::errors::{ConfigError, Result};
use serde::de::value::MapDeserializer;
use serde::de::{DeserializeOwned, Deserializer, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

impl Record {
    /// Deserializes this record into `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramcfg::domain::{ConfigValue, Record};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// #[serde(rename_all = "camelCase")]
    /// struct Service {
    ///     email: String,
    ///     age: u32,
    ///     is_excellent: bool,
    ///     nickname: Option<String>,
    /// }
    ///
    /// let mut record = Record::new();
    /// record.insert("email", Some(ConfigValue::from("winning@life.com")));
    /// record.insert("age", Some(ConfigValue::from(22)));
    /// record.insert("isExcellent", Some(ConfigValue::from(true)));
    /// record.insert("nickname", None);
    ///
    /// let service: Service = record.deserialize_into().unwrap();
    /// assert_eq!(service.age, 22);
    /// assert!(service.nickname.is_none());
    /// ```
    pub fn deserialize_into<T: DeserializeOwned>(self) -> Result<T> {
        T::deserialize(ConfigValue::Record(self))
    }
}

impl<'de> Deserializer<'de> for ConfigValue {
    type Error = ConfigError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        match self {
            ConfigValue::String(s) => visitor.visit_string(s),
            ConfigValue::Integer(n) => visitor.visit_i64(n),
            ConfigValue::Boolean(b) => visitor.visit_bool(b),
            ConfigValue::Record(r) => {
                let present = r
                    .into_entries()
                    .into_iter()
                    .filter_map(|(name, value)| value.map(|v| (name, v)));
                MapDeserializer::new(present).deserialize_any(visitor)
            }
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        match self {
            ConfigValue::String(s) => {
                let de: serde::de::value::StringDeserializer<ConfigError> = s.into_deserializer();
                de.deserialize_enum(name, variants, visitor)
            }
            other => other.deserialize_any(visitor),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, ConfigError> for ConfigValue {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}
