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

use contracts::domain::common::ApiResource;

use crate::shared::list_pipeline::ListResource;

pub use a001_property::list::PropertyList;
pub use a002_car::list::CarList;
pub use a003_car_rental_company::list::CarRentalCompanyList;
pub use a004_cruise::list::CruiseList;
pub use a005_cruise_ship::list::CruiseShipList;
pub use a006_cruise_cabin_type::list::CruiseCabinTypeList;
pub use a007_flight::list::FlightList;
pub use a008_airline::list::AirlineList;
pub use a009_airport::list::AirportList;
pub use a010_user::list::UserList;
pub use a011_onekey_account::list::OneKeyAccountList;

/// Описание ресурса для команды `admin resources`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceInfo {
    pub key: &'static str,
    pub full_name: String,
    pub title: &'static str,
    pub endpoint: &'static str,
    pub route: &'static str,
    pub dimensions: Vec<&'static str>,
}

fn info<R: ListResource>() -> ResourceInfo {
    ResourceInfo {
        key: R::KEY,
        full_name: <R::Entity as ApiResource>::full_name(),
        title: R::title(),
        endpoint: R::endpoint(),
        route: R::ROUTE,
        dimensions: R::dimensions().iter().map(|d| d.key).collect(),
    }
}

/// Все экраны списков
pub fn resources() -> Vec<ResourceInfo> {
    vec![
        info::<PropertyList>(),
        info::<CarList>(),
        info::<CarRentalCompanyList>(),
        info::<CruiseList>(),
        info::<CruiseShipList>(),
        info::<CruiseCabinTypeList>(),
        info::<FlightList>(),
        info::<AirlineList>(),
        info::<AirportList>(),
        info::<UserList>(),
        info::<OneKeyAccountList>(),
    ]
}

/// Вызвать `$body` с `$r`, связанным с типом экрана по ключу CLI
///
/// Для неизвестного ключа выполняется `$unknown`.
#[macro_export]
macro_rules! with_list_resource {
    ($key:expr, $r:ident => $body:expr, _ => $unknown:expr) => {{
        use $crate::domain::*;
        #[allow(unused_imports)]
        use $crate::shared::list_pipeline::ListResource as _;
        match $key {
            k if k == PropertyList::KEY => { type $r = PropertyList; $body }
            k if k == CarList::KEY => { type $r = CarList; $body }
            k if k == CarRentalCompanyList::KEY => { type $r = CarRentalCompanyList; $body }
            k if k == CruiseList::KEY => { type $r = CruiseList; $body }
            k if k == CruiseShipList::KEY => { type $r = CruiseShipList; $body }
            k if k == CruiseCabinTypeList::KEY => { type $r = CruiseCabinTypeList; $body }
            k if k == FlightList::KEY => { type $r = FlightList; $body }
            k if k == AirlineList::KEY => { type $r = AirlineList; $body }
            k if k == AirportList::KEY => { type $r = AirportList; $body }
            k if k == UserList::KEY => { type $r = UserList; $body }
            k if k == OneKeyAccountList::KEY => { type $r = OneKeyAccountList; $body }
            _ => $unknown,
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resource_keys_unique() {
        let all = resources();
        assert_eq!(all.len(), 11);
        let keys: HashSet<_> = all.iter().map(|r| r.key).collect();
        assert_eq!(keys.len(), all.len());
        assert!(all.iter().all(|r| r.endpoint.starts_with("/api/") && r.endpoint.ends_with('/')));
        assert_eq!(all[6].full_name, "a007_flight");
    }

    #[test]
    fn test_dispatch_by_key() {
        fn title_of(key: &str) -> Option<&'static str> {
            crate::with_list_resource!(key, R => Some(R::title()), _ => None)
        }
        assert_eq!(title_of("cruise-ships"), Some("Cruise ships"));
        assert_eq!(title_of("boats"), None);
    }
}
