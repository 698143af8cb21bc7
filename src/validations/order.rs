#[derive(Debug, Clone, Copy)]
pub struct OrderPrice(i32);

impl OrderPrice {
    /// A coffee order never sells below 2, so anything cheaper is rejected
    /// before it reaches storage.
    pub fn parse(price: i32) -> std::result::Result<OrderPrice, String> {
        if price < 2 {
            Err(format!("{} is not a valid order price.", price))
        } else {
            Ok(Self(price))
        }
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}
