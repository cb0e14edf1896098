//! Built-in reference data set.

use pc_core::{ApplicationTypeId, CategoryId, ProductId};
use serde_json::json;

use crate::catalog::Catalog;
use crate::error::CatalogResult;
use crate::model::{ApplicationType, ProductCategory, ProductRecord, Specifications};

const CATEGORIES: [(u32, &str, &str); 4] = [
    (
        1,
        "Industrial Pumps",
        "Heavy-duty pumps for various industrial applications",
    ),
    (
        2,
        "Hydraulic Systems",
        "High-pressure fluid power transmission systems",
    ),
    (3, "Pneumatic Controls", "Compressed air-based control systems"),
    (4, "Compressors", "Air and gas compression equipment"),
];

/// (id, category id, name, description)
const APPLICATION_TYPES: [(u32, u32, &str, &str); 16] = [
    (1, 1, "Water Treatment", "Municipal and industrial water processing"),
    (2, 1, "Chemical Processing", "Handling corrosive substances"),
    (3, 1, "Oil & Gas", "Extraction and refinery processes"),
    (4, 1, "Food & Beverage", "Sanitary processing requirements"),
    (5, 2, "Manufacturing", "Assembly and production lines"),
    (6, 2, "Mobile Equipment", "Construction and agricultural machinery"),
    (7, 2, "Marine Applications", "Offshore and shipping equipment"),
    (8, 2, "Metal Forming", "Presses and industrial processing"),
    (9, 3, "Automation", "Robotic and automated systems"),
    (10, 3, "Instrumentation", "Precision control systems"),
    (11, 3, "Material Handling", "Conveying and sorting systems"),
    (12, 3, "Safety Systems", "Emergency shutdown and control"),
    (13, 4, "HVAC", "Heating, ventilation, and air conditioning"),
    (14, 4, "Refrigeration", "Commercial and industrial cooling"),
    (15, 4, "Industrial Processes", "Manufacturing and processing plants"),
    (16, 4, "Energy Production", "Power generation applications"),
];

/// The sample catalog: four categories, sixteen application types and nine
/// products.
pub fn sample_catalog() -> CatalogResult<Catalog> {
    Catalog::new(sample_categories(), sample_application_types(), sample_products())
}

pub fn sample_categories() -> Vec<ProductCategory> {
    CATEGORIES
        .iter()
        .map(|&(id, name, description)| ProductCategory {
            id: CategoryId::new(id),
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect()
}

pub fn sample_application_types() -> Vec<ApplicationType> {
    APPLICATION_TYPES
        .iter()
        .map(|&(id, category_id, name, description)| ApplicationType {
            id: ApplicationTypeId::new(id),
            category_id: CategoryId::new(category_id),
            name: name.to_string(),
            description: Some(description.to_string()),
        })
        .collect()
}

fn specs(value: serde_json::Value) -> Specifications {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Specifications::new(),
    }
}

pub fn sample_products() -> Vec<ProductRecord> {
    vec![
        ProductRecord {
            id: ProductId::new(1),
            category_id: CategoryId::new(1),
            name: "IP-X240".to_string(),
            series: Some("Standard Series".to_string()),
            description: Some("General-purpose industrial pump for water treatment applications".to_string()),
            min_flow_rate: 100.0,
            max_flow_rate: 200.0,
            min_pressure: 2.0,
            max_pressure: 8.0,
            min_temperature: -10.0,
            max_temperature: 90.0,
            efficiency: Some(78.0),
            power_consumption: Some(7.2),
            noise_level: Some(72.0),
            price: Some(12450.0),
            maintenance_interval: Some(8),
            estimated_lifetime: Some(15),
            specifications: specs(json!({
                "impellerType": "Closed",
                "material": "Stainless Steel 316",
                "connectionSize": "DN80",
                "certifications": ["ISO 9001", "CE"],
                "motorPower": 7.5,
                "voltage": 380,
                "ipRating": "IP55"
            })),
        },
        ProductRecord {
            id: ProductId::new(2),
            category_id: CategoryId::new(1),
            name: "IP-X350 Pro".to_string(),
            series: Some("Premium Series".to_string()),
            description: Some("High-performance industrial pump for demanding applications".to_string()),
            min_flow_rate: 150.0,
            max_flow_rate: 300.0,
            min_pressure: 2.0,
            max_pressure: 10.0,
            min_temperature: -15.0,
            max_temperature: 110.0,
            efficiency: Some(83.0),
            power_consumption: Some(8.1),
            noise_level: Some(69.0),
            price: Some(15980.0),
            maintenance_interval: Some(10),
            estimated_lifetime: Some(18),
            specifications: specs(json!({
                "impellerType": "Semi-open",
                "material": "Duplex Stainless Steel",
                "connectionSize": "DN100",
                "certifications": ["ISO 9001", "CE", "ATEX"],
                "motorPower": 9.0,
                "voltage": 380,
                "ipRating": "IP66"
            })),
        },
        ProductRecord {
            id: ProductId::new(3),
            category_id: CategoryId::new(1),
            name: "IP-X180 Eco".to_string(),
            series: Some("Economy Series".to_string()),
            description: Some("Cost-effective industrial pump for standard applications".to_string()),
            min_flow_rate: 75.0,
            max_flow_rate: 150.0,
            min_pressure: 1.5,
            max_pressure: 6.0,
            min_temperature: 0.0,
            max_temperature: 80.0,
            efficiency: Some(72.0),
            power_consumption: Some(6.5),
            noise_level: Some(74.0),
            price: Some(9850.0),
            maintenance_interval: Some(6),
            estimated_lifetime: Some(12),
            specifications: specs(json!({
                "impellerType": "Closed",
                "material": "Cast Iron",
                "connectionSize": "DN65",
                "certifications": ["ISO 9001", "CE"],
                "motorPower": 5.5,
                "voltage": 380,
                "ipRating": "IP54"
            })),
        },
        ProductRecord {
            id: ProductId::new(4),
            category_id: CategoryId::new(1),
            name: "IP-X450 Ultra".to_string(),
            series: Some("Ultra Series".to_string()),
            description: Some("Ultra-high performance industrial pump for critical applications".to_string()),
            min_flow_rate: 200.0,
            max_flow_rate: 400.0,
            min_pressure: 3.0,
            max_pressure: 12.0,
            min_temperature: -20.0,
            max_temperature: 150.0,
            efficiency: Some(87.0),
            power_consumption: Some(9.6),
            noise_level: Some(71.0),
            price: Some(21500.0),
            maintenance_interval: Some(12),
            estimated_lifetime: Some(20),
            specifications: specs(json!({
                "impellerType": "Semi-open",
                "material": "Super Duplex Stainless Steel",
                "connectionSize": "DN125",
                "certifications": ["ISO 9001", "CE", "ATEX", "API 610"],
                "motorPower": 11.0,
                "voltage": 380,
                "ipRating": "IP67"
            })),
        },
        ProductRecord {
            id: ProductId::new(5),
            category_id: CategoryId::new(1),
            name: "IP-X120 Mini".to_string(),
            series: Some("Compact Series".to_string()),
            description: Some("Compact industrial pump for space-constrained applications".to_string()),
            min_flow_rate: 40.0,
            max_flow_rate: 120.0,
            min_pressure: 1.0,
            max_pressure: 5.0,
            min_temperature: 0.0,
            max_temperature: 70.0,
            efficiency: Some(69.0),
            power_consumption: Some(4.8),
            noise_level: Some(68.0),
            price: Some(7650.0),
            maintenance_interval: Some(6),
            estimated_lifetime: Some(10),
            specifications: specs(json!({
                "impellerType": "Closed",
                "material": "Stainless Steel 304",
                "connectionSize": "DN50",
                "certifications": ["ISO 9001", "CE"],
                "motorPower": 4.0,
                "voltage": 220,
                "ipRating": "IP54"
            })),
        },
        ProductRecord {
            id: ProductId::new(6),
            category_id: CategoryId::new(1),
            name: "IP-X280 Chem".to_string(),
            series: Some("Chemical Series".to_string()),
            description: Some("Specialized industrial pump for chemical processing".to_string()),
            min_flow_rate: 100.0,
            max_flow_rate: 250.0,
            min_pressure: 2.0,
            max_pressure: 9.0,
            min_temperature: -15.0,
            max_temperature: 120.0,
            efficiency: Some(76.0),
            power_consumption: Some(7.8),
            noise_level: Some(73.0),
            price: Some(14250.0),
            maintenance_interval: Some(7),
            estimated_lifetime: Some(14),
            specifications: specs(json!({
                "impellerType": "Closed",
                "material": "Hastelloy C",
                "connectionSize": "DN80",
                "certifications": ["ISO 9001", "CE", "ATEX"],
                "motorPower": 7.5,
                "voltage": 380,
                "ipRating": "IP65"
            })),
        },
        ProductRecord {
            id: ProductId::new(7),
            category_id: CategoryId::new(2),
            name: "HS-200".to_string(),
            series: Some("Standard Series".to_string()),
            description: Some("Standard hydraulic system for industrial applications".to_string()),
            min_flow_rate: 80.0,
            max_flow_rate: 180.0,
            min_pressure: 150.0,
            max_pressure: 250.0,
            min_temperature: -10.0,
            max_temperature: 80.0,
            efficiency: Some(75.0),
            power_consumption: Some(15.0),
            noise_level: Some(78.0),
            price: Some(18500.0),
            maintenance_interval: Some(6),
            estimated_lifetime: Some(12),
            specifications: specs(json!({
                "pumpType": "Piston",
                "tankCapacity": 100,
                "material": "Steel",
                "filterRating": "10 micron",
                "certifications": ["ISO 9001", "CE"],
                "motorPower": 15.0,
                "voltage": 380,
                "ipRating": "IP54"
            })),
        },
        ProductRecord {
            id: ProductId::new(8),
            category_id: CategoryId::new(3),
            name: "PC-150".to_string(),
            series: Some("Standard Series".to_string()),
            description: Some("Standard pneumatic control system for automation".to_string()),
            min_flow_rate: 150.0,
            max_flow_rate: 300.0,
            min_pressure: 4.0,
            max_pressure: 8.0,
            min_temperature: 0.0,
            max_temperature: 60.0,
            efficiency: Some(72.0),
            power_consumption: Some(5.5),
            noise_level: Some(70.0),
            price: Some(9800.0),
            maintenance_interval: Some(8),
            estimated_lifetime: Some(14),
            specifications: specs(json!({
                "valveType": "Directional",
                "material": "Aluminum",
                "connectionSize": "G1/2",
                "certifications": ["ISO 9001", "CE"],
                "airConsumption": 350,
                "voltage": 24,
                "ipRating": "IP54"
            })),
        },
        ProductRecord {
            id: ProductId::new(9),
            category_id: CategoryId::new(4),
            name: "CP-250".to_string(),
            series: Some("Standard Series".to_string()),
            description: Some("Standard compressor for industrial applications".to_string()),
            min_flow_rate: 200.0,
            max_flow_rate: 400.0,
            min_pressure: 6.0,
            max_pressure: 10.0,
            min_temperature: 0.0,
            max_temperature: 40.0,
            efficiency: Some(76.0),
            power_consumption: Some(22.0),
            noise_level: Some(82.0),
            price: Some(15600.0),
            maintenance_interval: Some(9),
            estimated_lifetime: Some(15),
            specifications: specs(json!({
                "compressorType": "Screw",
                "tankCapacity": 500,
                "material": "Steel",
                "airQuality": "Class 2",
                "certifications": ["ISO 9001", "CE"],
                "motorPower": 22.0,
                "voltage": 380,
                "ipRating": "IP54"
            })),
        },
    ]
}
