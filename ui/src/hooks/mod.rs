pub mod use_catalog;
