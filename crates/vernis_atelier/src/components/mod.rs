//! Styled component wrappers.
//!
//! Each wrapper pairs a variant table with a host element or a headless
//! primitive from [`crate::primitive`].

mod alert;
mod badge;
mod button;
mod card;
mod checkbox;
mod dialog;
mod input;
mod label;
mod progress;
mod separator;
mod switch;
mod tabs;
mod tooltip;

pub use alert::{Alert, AlertDescription, AlertTitle, AlertVariant, ALERT_TABLE};
pub use badge::{Badge, BadgeVariant, BADGE_TABLE};
pub use button::{Button, ButtonSize, ButtonVariant, BUTTON_TABLE};
pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
pub use checkbox::Checkbox;
pub use dialog::{
    Dialog, DialogClose, DialogContent, DialogDescription, DialogFooter, DialogHeader,
    DialogTitle, DialogTrigger,
};
pub use input::Input;
pub use label::Label;
pub use progress::Progress;
pub use separator::{Separator, SEPARATOR_TABLE};
pub use switch::{Switch, SwitchSize, SWITCH_TABLE, SWITCH_THUMB_TABLE};
pub use tabs::{Tabs, TabsContent, TabsList, TabsListVariant, TabsTrigger, TABS_LIST_TABLE};
pub use tooltip::{Tooltip, TooltipContent, TooltipTrigger};

use crate::wrapper::{Wrapper, WrapperContract};
use vernis_tint::VariantTable;

/// Contracts of every element-rendering wrapper.
pub const WRAPPER_CONTRACTS: &[WrapperContract] = &[
    Alert::CONTRACT,
    AlertTitle::CONTRACT,
    AlertDescription::CONTRACT,
    Badge::CONTRACT,
    Button::CONTRACT,
    Card::CONTRACT,
    CardHeader::CONTRACT,
    CardTitle::CONTRACT,
    CardDescription::CONTRACT,
    CardContent::CONTRACT,
    CardFooter::CONTRACT,
    Checkbox::CONTRACT,
    DialogTrigger::CONTRACT,
    DialogContent::CONTRACT,
    DialogHeader::CONTRACT,
    DialogFooter::CONTRACT,
    DialogTitle::CONTRACT,
    DialogDescription::CONTRACT,
    DialogClose::CONTRACT,
    Input::CONTRACT,
    Label::CONTRACT,
    Progress::CONTRACT,
    Separator::CONTRACT,
    Switch::CONTRACT,
    Tabs::CONTRACT,
    TabsList::CONTRACT,
    TabsTrigger::CONTRACT,
    TabsContent::CONTRACT,
    TooltipTrigger::CONTRACT,
    TooltipContent::CONTRACT,
];

/// Every variant table shipped with the library.
pub static VARIANT_TABLES: &[&VariantTable] = &[
    &ALERT_TABLE,
    &BADGE_TABLE,
    &BUTTON_TABLE,
    &SEPARATOR_TABLE,
    &SWITCH_TABLE,
    &SWITCH_THUMB_TABLE,
    &TABS_LIST_TABLE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use vernis_carton::FxHashSet;

    #[test]
    fn test_slots_unique() {
        let mut seen = FxHashSet::default();
        for contract in WRAPPER_CONTRACTS {
            assert!(seen.insert(contract.slot), "duplicate slot {}", contract.slot);
        }
    }

    #[test]
    fn test_all_tables_valid() {
        for table in VARIANT_TABLES {
            assert_eq!(table.validate(), Ok(()), "{}", table.name);
        }
    }
}
