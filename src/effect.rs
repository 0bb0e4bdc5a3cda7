//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch weather and forecast for `city` as fetch cycle `seq`
    FetchReport { seq: u64, city: String },
}
