use serde::{Deserialize, Serialize};

//Define a datastructure for a vehicle record as it is stored in the backing file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vehicle {
    #[serde(rename = "VRM")]
    pub vrm: String,
    pub make: String,
    pub model: String,
    pub variant: String,
    pub colour: String,
    pub body_type: String,
    pub price: i64,
    pub mileage: i64,
    pub date_of_registration: String,
}

impl Vehicle {
    /// Registration marks compare without regard to ASCII case.
    pub fn has_vrm(&self, vrm: &str) -> bool {
        self.vrm.eq_ignore_ascii_case(vrm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_the_file_field_names() {
        let raw = r#"{
            "VRM": "AB12CDE",
            "Make": "BMW",
            "Model": "3 Series",
            "Variant": "320d M Sport",
            "Colour": "Black",
            "BodyType": "Saloon",
            "Price": 12995,
            "Mileage": 45000,
            "DateOfRegistration": "2018-03-01"
        }"#;
        let vehicle: Vehicle = serde_json::from_str(raw).unwrap();
        assert_eq!(vehicle.vrm, "AB12CDE");
        assert_eq!(vehicle.body_type, "Saloon");

        let value = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(value["VRM"], "AB12CDE");
        assert_eq!(value["DateOfRegistration"], "2018-03-01");
        assert!(value.get("Vrm").is_none());
    }

    #[test]
    fn vrm_comparison_ignores_case() {
        let vehicle = Vehicle {
            vrm: "AB12CDE".to_string(),
            make: String::new(),
            model: String::new(),
            variant: String::new(),
            colour: String::new(),
            body_type: String::new(),
            price: 0,
            mileage: 0,
            date_of_registration: String::new(),
        };
        assert!(vehicle.has_vrm("ab12cde"));
        assert!(!vehicle.has_vrm("ab12cdf"));
    }
}
