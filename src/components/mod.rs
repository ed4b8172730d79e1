mod bottom_sheet;
pub use bottom_sheet::*;

mod button;
pub use button::*;

mod card;
pub use card::*;

mod switch;
pub use switch::*;
