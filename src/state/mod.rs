mod persistence;

pub use persistence::{load_items_csv, load_items_json, load_shopping_list, save_result};
