mod crud;
mod stocks;
