//! Merchant purchase checklist.

use crate::error::LedgerError;
use crate::names::{normalize_area, normalize_merchant};
use crate::state::GameState;

impl GameState {
    /// Add a merchant under an area, starting as not bought.
    ///
    /// The area does not need to be tracked for souls; its checklist section
    /// is created on demand.
    pub fn add_merchant(&mut self, area: &str, name: &str) -> Result<(String, String), LedgerError> {
        let area = normalize_area(area)?;
        let name = normalize_merchant(name)?;
        let section = self.merchant_checklist.entry(area.clone()).or_default();
        if section.contains_key(&name) {
            return Err(LedgerError::MerchantExists { area, name });
        }
        section.insert(name.clone(), false);
        Ok((area, name))
    }

    /// Flip a merchant's bought flag; returns the new value.
    pub fn toggle_merchant(&mut self, area: &str, name: &str) -> Result<bool, LedgerError> {
        let area_key = if self.merchant_checklist.contains_key(area) {
            area.to_string()
        } else {
            normalize_area(area)?
        };
        let name = normalize_merchant(name)?;
        let flag = self
            .merchant_checklist
            .get_mut(&area_key)
            .and_then(|section| section.get_mut(&name))
            .ok_or(LedgerError::MerchantNotFound {
                area: area_key.clone(),
                name: name.clone(),
            })?;
        *flag = !*flag;
        Ok(*flag)
    }

    /// `(bought, total)` merchant counts across every area.
    pub fn merchant_progress(&self) -> (usize, usize) {
        self.merchant_checklist
            .values()
            .flat_map(|section| section.values())
            .fold((0, 0), |(bought, total), &b| (bought + usize::from(b), total + 1))
    }
}
