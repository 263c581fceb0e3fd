use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::{from_reader, from_value, Value};

use crate::errors::VaultError;

pub trait Vault {
    fn read_vault_values<T: DeserializeOwned>(&self, name: String) -> Result<T, VaultError>;
}

/// A value stored under its own key of the vault.
pub trait VaultReadable: DeserializeOwned {
    const KEY: &'static str;

    fn from_vault<V: Vault>(vault: &V) -> Result<Self, VaultError> {
        vault.read_vault_values(Self::KEY.into())
    }
}

/// A vault backed by one JSON document on disk.
pub struct VaultImpl {
    pub path: PathBuf,
}

impl VaultImpl {
    fn document(&self) -> Result<Value, VaultError> {
        let file = File::open(&self.path).map_err(|source| VaultError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(from_reader(BufReader::new(file))?)
    }
}

impl Vault for VaultImpl {
    fn read_vault_values<T: DeserializeOwned>(&self, name: String) -> Result<T, VaultError> {
        self.document()?.read_vault_values(name)
    }
}

impl Vault for Value {
    fn read_vault_values<T: DeserializeOwned>(&self, name: String) -> Result<T, VaultError> {
        let value = self
            .get(&name)
            .cloned()
            .ok_or(VaultError::MissingKey(name))?;
        Ok(from_value(value)?)
    }
}
