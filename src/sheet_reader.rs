use chrono::NaiveDate;
#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use tracing::debug;

use crate::amounts::Figure;
use crate::change::{Change, ChangeVaultValue};
use crate::errors::{ForecastError, VaultError};
use crate::money_sheet::MoneySheet;
use crate::portfolio::group::Group;
use crate::portfolio::Portfolio;
use crate::vault::{Vault, VaultImpl, VaultReadable};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct InitialBalance(pub Figure);

impl VaultReadable for InitialBalance {
    const KEY: &'static str = "initial_balance";
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GroupVaultValue {
    pub name: String,
    #[serde(default)]
    pub changes: Vec<ChangeVaultValue>,
}

impl GroupVaultValue {
    fn into_group(self, today: &NaiveDate) -> Result<Group, ForecastError> {
        let changes = self
            .changes
            .into_iter()
            .map(|change| change.into_change(today))
            .collect::<Result<Vec<Change>, ForecastError>>()?;
        Ok(Group::new(self.name, changes))
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct PortfolioVaultValues(pub Vec<GroupVaultValue>);

impl VaultReadable for PortfolioVaultValues {
    const KEY: &'static str = "portfolio";
}

impl PortfolioVaultValues {
    fn into_portfolio(self, today: &NaiveDate) -> Result<Portfolio, ForecastError> {
        let groups = self
            .0
            .into_iter()
            .map(|group| group.into_group(today))
            .collect::<Result<Vec<Group>, ForecastError>>()?;
        Ok(Portfolio::new(groups))
    }
}

/// Source of the money sheet a forecast runs on.
#[cfg_attr(test, automock)]
pub trait SheetReader {
    /// Relative schedules of the sheet are resolved against `today`.
    fn money_sheet(&self, today: &NaiveDate) -> Result<MoneySheet, VaultError>;
}

pub fn read_money_sheet<V: Vault>(vault: &V, today: &NaiveDate) -> Result<MoneySheet, VaultError> {
    let InitialBalance(initial_balance) = InitialBalance::from_vault(vault)?;
    let portfolio = PortfolioVaultValues::from_vault(vault)?.into_portfolio(today)?;

    debug!(
        %initial_balance,
        groups = portfolio.groups.len(),
        changes = portfolio.changes().count(),
        "Read money sheet"
    );
    Ok(MoneySheet::new(initial_balance, portfolio))
}

impl SheetReader for VaultImpl {
    fn money_sheet(&self, today: &NaiveDate) -> Result<MoneySheet, VaultError> {
        read_money_sheet(self, today)
    }
}
