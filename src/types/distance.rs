//! Path length that may be unbounded.
//!
//! JSON cannot carry IEEE infinities, so a `Distance` serializes as a plain
//! number when finite and as the strings `"inf"` / `"-inf"` otherwise.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Path length that may be `+inf` (unreachable) or `-inf`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Distance(pub f64);

impl Distance {
  pub const INFINITY: Distance = Distance(f64::INFINITY);
  pub const ZERO: Distance = Distance(0.0);

  pub fn value(self) -> f64 {
    self.0
  }

  pub fn is_finite(self) -> bool {
    self.0.is_finite()
  }
}

impl From<f64> for Distance {
  fn from(v: f64) -> Self {
    Distance(v)
  }
}

impl fmt::Display for Distance {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.0 == f64::INFINITY {
      write!(f, "∞")
    } else if self.0 == f64::NEG_INFINITY {
      write!(f, "-∞")
    } else {
      write!(f, "{}", self.0)
    }
  }
}

impl Serialize for Distance {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    if self.0 == f64::INFINITY {
      serializer.serialize_str("inf")
    } else if self.0 == f64::NEG_INFINITY {
      serializer.serialize_str("-inf")
    } else {
      serializer.serialize_f64(self.0)
    }
  }
}

struct DistanceVisitor;

impl Visitor<'_> for DistanceVisitor {
  type Value = Distance;

  fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "a number, \"inf\" or \"-inf\"")
  }

  fn visit_f64<E: de::Error>(self, v: f64) -> Result<Distance, E> {
    Ok(Distance(v))
  }

  fn visit_i64<E: de::Error>(self, v: i64) -> Result<Distance, E> {
    Ok(Distance(v as f64))
  }

  fn visit_u64<E: de::Error>(self, v: u64) -> Result<Distance, E> {
    Ok(Distance(v as f64))
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<Distance, E> {
    match v {
      "inf" => Ok(Distance::INFINITY),
      "-inf" => Ok(Distance(f64::NEG_INFINITY)),
      other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
    }
  }
}

impl<'de> Deserialize<'de> for Distance {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_any(DistanceVisitor)
  }
}

/// `#[serde(with = ...)]` adapter giving a bare `f64` the same encoding as
/// [`Distance`].
pub(crate) mod unbounded {
  use serde::{Deserialize, Deserializer, Serialize, Serializer};

  use super::Distance;

  pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    Distance(*value).serialize(serializer)
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Distance::deserialize(deserializer).map(Distance::value)
  }
}
