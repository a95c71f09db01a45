/// Render a weight given in tenths of a kilogram with one decimal place, e.g. `69 -> "6.9 kg"`.
///
/// Integer arithmetic keeps the output exact for every input.
pub fn format_weight_kg(weight_tenths: u32) -> String {
    format!("{}.{} kg", weight_tenths / 10, weight_tenths % 10)
}
