//! Server-rendered views.
//!
//! Each view renders the complete content of one container on the page.
//! Containers are always swapped wholesale (`hx-swap="innerHTML"`), so a
//! render never patches existing children.
//!
//! | View | Container | Template |
//! |------|-----------|----------|
//! | [`products`] | `#product-list` | `partials/product_list.html` |
//! | [`cart`] | `#cart-list` | `partials/cart_list.html` |

pub mod cart;
pub mod products;

