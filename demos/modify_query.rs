use loose_url::{QueryEdit, modify_url_query, parse_search};

fn main() {
    let url = "https://example.com/shop?category=books&page=3#/cart?coupon=SAVE10";

    // Reset paging and add a filter
    let next = modify_url_query(
        url,
        QueryEdit::merge().remove("page").set("sort", "price asc"),
        QueryEdit::Keep,
    );
    println!("{next}"); // https://example.com/shop?category=books&sort=price%20asc#/cart?coupon=SAVE10

    // Drop the coupon from the hash route only
    let next = modify_url_query(url, QueryEdit::Keep, QueryEdit::Clear);
    println!("{next}"); // https://example.com/shop?category=books&page=3#/cart

    // Repeated keys
    let next = modify_url_query(
        "/search",
        QueryEdit::merge().set_list("tag", ["rust", "url"]),
        QueryEdit::Keep,
    );
    println!("{next}"); // /search?tag=rust&tag=url

    let query = parse_search(&next[next.find('?').unwrap_or(next.len())..]);
    println!("tags: {:?}", query.get("tag").map(|tag| tag.strings()));
}
