mod get_stock;
mod search;
