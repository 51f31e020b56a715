mod callback;
mod login;
mod profile;
mod verify;
