use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

/// Resolve a Kubernetes resource quantity to a plain integer value
/// (cores for cpu, bytes for memory). Binary and decimal suffixes are
/// expanded; milli values round down to whole units. Unparseable input
/// resolves to zero.
pub fn quantity_value(quantity: &Quantity) -> i64 {
    let raw = quantity.0.as_str();

    let split = raw
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-')
        .unwrap_or(raw.len());
    let (number, suffix) = raw.split_at(split);
    let Ok(base) = number.parse::<f64>() else {
        return 0;
    };

    let scale: f64 = match suffix {
        "" => 1.0,
        "m" => 1e-3,
        "k" => 1e3,
        "M" => 1e6,
        "G" => 1e9,
        "T" => 1e12,
        "Ki" => 1024.0,
        "Mi" => 1024.0 * 1024.0,
        "Gi" => 1024.0 * 1024.0 * 1024.0,
        "Ti" => 1024.0f64.powi(4),
        _ => return 0,
    };

    (base * scale) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(s: &str) -> Quantity {
        Quantity(s.to_string())
    }

    #[test]
    fn plain_and_milli_cpu() {
        assert_eq!(quantity_value(&q("4")), 4);
        assert_eq!(quantity_value(&q("4000m")), 4);
        assert_eq!(quantity_value(&q("500m")), 0);
    }

    #[test]
    fn binary_memory_suffixes() {
        assert_eq!(quantity_value(&q("1Ki")), 1024);
        assert_eq!(quantity_value(&q("2Mi")), 2 * 1024 * 1024);
        assert_eq!(quantity_value(&q("1Gi")), 1024 * 1024 * 1024);
    }

    #[test]
    fn garbage_resolves_to_zero() {
        assert_eq!(quantity_value(&q("")), 0);
        assert_eq!(quantity_value(&q("notanumber")), 0);
    }
}
