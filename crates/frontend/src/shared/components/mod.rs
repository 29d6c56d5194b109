pub mod date_input;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
