mod common;
mod forecast;
mod histogram;
mod main;
mod prices;
