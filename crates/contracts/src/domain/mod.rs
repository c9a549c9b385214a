pub mod common;

pub mod a001_property;
pub mod a002_car;
pub mod a003_car_rental_company;
pub mod a004_cruise;
pub mod a005_cruise_ship;
pub mod a006_cruise_cabin_type;
pub mod a007_flight;
pub mod a008_airline;
pub mod a009_airport;
pub mod a010_user;
pub mod a011_onekey_account;
