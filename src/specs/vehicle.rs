// src/specs/vehicle.rs
//! Name / vehicle disambiguation for the per-stage tables.
//!
//! The stage tables print the driver pair and the car in one cell with no
//! separator between the second name and the make, e.g.
//! `stonebeel / Trevor BonesteelCitroen C2 R2 Max`. We recover the split by
//! scanning for known manufacturer names.
//!
//! Known limitation: this is a plain substring scan in list order. A make
//! that appears inside a driver name, or a short make inside a longer one
//! (`GM` inside `GMC`), wins over anything later in the list. Keep the list
//! order as-is; changing it changes which cars parse.

/// Manufacturer names that mark the start of the vehicle text, in match order.
pub const BRANDS: &[&str] = &[
    "Citroen", "Ford", "Peugeot", "Opel", "Abarth", "Skoda", "Mitsubishi", "Subaru", "BMW", "GM", "GMC",
    "Toyota", "Honda", "Suzuki", "Acura", "Audi", "Volkswagen", "Chevrolet", "Volvo", "Kia", "Jeep", "Dodge",
    "Mazda", "Hyundai", "Buick", "MINI", "Porsche", "Mercedes", "Land Rover", "Alfa Romeo", "Lancia",
];

const NAME_SEP: &str = " / ";

/// Split the combined cell into `(name, vehicle)`.
///
/// `name` is always `"<first> / <second>"`, with the separator kept even
/// when there is no second name. `vehicle` is empty when no make matched.
pub fn split_name_vehicle(combined: &str) -> (String, String) {
    let combined = combined.trim();

    let (first, second, vehicle) = match combined.split_once(NAME_SEP) {
        Some((first, rest)) => {
            let rest = rest.trim();
            match split_at_brand(rest) {
                Some((second, vehicle)) => (first.trim(), second, vehicle),
                None => (first.trim(), rest, s!()),
            }
        }
        None => match split_at_brand(combined) {
            Some((first, vehicle)) => (first, "", vehicle),
            None => (combined, "", s!()),
        },
    };

    (format!("{first}{NAME_SEP}{second}"), vehicle)
}

/// First brand (in list order) found anywhere in `text`: returns the trimmed
/// text before it and the vehicle string starting at the brand.
fn split_at_brand(text: &str) -> Option<(&str, String)> {
    BRANDS.iter().find_map(|&brand| {
        let (before, after) = text.split_once(brand)?;
        let vehicle = format!("{brand} {}", after.trim());
        Some((before.trim(), s!(vehicle.trim_end())))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_glued_second_name_and_car() {
        let (name, vehicle) = split_name_vehicle("stonebeel / Trevor BonesteelCitroen C2 R2 Max");
        assert_eq!(name, "stonebeel / Trevor Bonesteel");
        assert_eq!(vehicle, "Citroen C2 R2 Max");
    }

    #[test]
    fn no_brand_keeps_full_text_as_name() {
        let (name, vehicle) = split_name_vehicle("driver / co-driver Trabant 601");
        assert_eq!(name, "driver / co-driver Trabant 601");
        assert_eq!(vehicle, "");

        let (name, vehicle) = split_name_vehicle("solo racer");
        assert_eq!(name, "solo racer / ");
        assert_eq!(vehicle, "");
    }

    #[test]
    fn single_part_with_brand() {
        let (name, vehicle) = split_name_vehicle("lonewolfSkoda Fabia Rally2 evo");
        assert_eq!(name, "lonewolf / ");
        assert_eq!(vehicle, "Skoda Fabia Rally2 evo");
    }

    #[test]
    fn multi_word_brand() {
        let (name, vehicle) = split_name_vehicle("a / BLand Rover Defender");
        assert_eq!(name, "a / B");
        assert_eq!(vehicle, "Land Rover Defender");
    }

    #[test]
    fn glued_model_gets_a_space() {
        let (_, vehicle) = split_name_vehicle("a / bPeugeot208 Rally4");
        assert_eq!(vehicle, "Peugeot 208 Rally4");
    }

    #[test]
    fn brand_alone_has_no_trailing_space() {
        let (name, vehicle) = split_name_vehicle("x / yHonda");
        assert_eq!(name, "x / y");
        assert_eq!(vehicle, "Honda");
    }

    #[test]
    fn list_order_beats_text_order() {
        // "Ford" comes before "Subaru" in the list even though Subaru is first in the text
        let (name, vehicle) = split_name_vehicle("a / bSubaru Impreza Ford Edition");
        assert_eq!(name, "a / bSubaru Impreza");
        assert_eq!(vehicle, "Ford Edition");
    }

    #[test]
    fn short_brand_shadows_longer_one() {
        // GM precedes GMC, so GMC never matches
        let (_, vehicle) = split_name_vehicle("a / bGMC Syclone");
        assert_eq!(vehicle, "GM C Syclone");
    }

    #[test]
    fn split_is_deterministic() {
        let text = "stonebeel / Trevor BonesteelCitroen C2 R2 Max";
        assert_eq!(split_name_vehicle(text), split_name_vehicle(text));
    }

    #[test]
    fn only_first_separator_splits() {
        let (name, vehicle) = split_name_vehicle("a / b / cOpel Corsa");
        assert_eq!(name, "a / b / c");
        assert_eq!(vehicle, "Opel Corsa");
    }
}
