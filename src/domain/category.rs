#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Category {
    #[default]
    Toilets,
    DrinkingWater,
}

impl Category {
    /// The search keyword sent to the address-search service.
    pub fn keyword(&self) -> &'static str {
        match self {
            Category::Toilets => "toilets",
            Category::DrinkingWater => "drinking_water",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Toilets => "Toilets",
            Category::DrinkingWater => "Water",
        }
    }
}
