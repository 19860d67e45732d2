use std::fmt::Display;

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    common::Id,
    error::invalid_arguments_error,
    modifier::{
        ModifierKind,
        ModifierOwner,
    },
};

/// Reads ordered constructor arguments for one modifier class.
///
/// Every read consumes one argument. Errors name the class and the argument position.
pub struct ArgReader<'a> {
    kind: ModifierKind,
    args: &'a [Value],
    position: usize,
}

impl<'a> ArgReader<'a> {
    pub fn new(kind: ModifierKind, args: &'a [Value]) -> Self {
        Self {
            kind,
            args,
            position: 0,
        }
    }

    fn invalid_at<R: Display>(&self, position: usize, reason: R) -> anyhow::Error {
        invalid_arguments_error(self.kind, format!("argument {position} {reason}"))
    }

    /// Returns the next argument and its position.
    fn next(&mut self) -> Result<(usize, &'a Value)> {
        let position = self.position;
        let value = self
            .args
            .get(position)
            .ok_or_else(|| self.invalid_at(position, "is missing"))?;
        self.position += 1;
        Ok((position, value))
    }

    pub fn i64(&mut self) -> Result<i64> {
        let (position, value) = self.next()?;
        value
            .as_i64()
            .ok_or_else(|| self.invalid_at(position, "is not an integer"))
    }

    pub fn u32(&mut self) -> Result<u32> {
        let position = self.position;
        let value = self.i64()?;
        u32::try_from(value).map_err(|_| self.invalid_at(position, "is out of range"))
    }

    pub fn f64(&mut self) -> Result<f64> {
        let (position, value) = self.next()?;
        value
            .as_f64()
            .ok_or_else(|| self.invalid_at(position, "is not a number"))
    }

    pub fn bool(&mut self) -> Result<bool> {
        let (position, value) = self.next()?;
        value
            .as_bool()
            .ok_or_else(|| self.invalid_at(position, "is not a boolean"))
    }

    /// Reads a string label of a data enum, or any other deserializable value.
    pub fn label<T>(&mut self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let (position, value) = self.next()?;
        serde_json::from_value(value.clone()).map_err(|err| {
            self.invalid_at(position, format!("has unexpected value {value}: {err}"))
        })
    }

    pub fn labels<T>(&mut self) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.label::<Vec<T>>()
    }

    pub fn id(&mut self) -> Result<Id> {
        self.label::<Id>()
    }

    pub fn ids(&mut self) -> Result<Vec<Id>> {
        self.labels::<Id>()
    }

    /// Reads a held item owner, where negative ids mean any combatant.
    pub fn owner(&mut self) -> Result<ModifierOwner> {
        let position = self.position;
        let value = self.i64()?;
        ModifierOwner::from_arg(value)
            .ok_or_else(|| self.invalid_at(position, format!("is not a combatant id: {value}")))
    }

    /// Fails if arguments remain unread.
    pub fn finish(self) -> Result<()> {
        if self.position < self.args.len() {
            return Err(invalid_arguments_error(
                self.kind,
                format!(
                    "expected {} arguments, got {}",
                    self.position,
                    self.args.len()
                ),
            ));
        }
        Ok(())
    }
}
