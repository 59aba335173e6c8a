use super::*;

#[test]
fn tel_href_strips_formatting() {
    assert_eq!(tel_href("+36 70 217 8885"), "tel:+36702178885");
    assert_eq!(tel_href("0036 (70) 217-8885"), "tel:0036702178885");
}

#[test]
fn mailto_href_trims() {
    assert_eq!(mailto_href(" shoppdogg583@gmail.com "), "mailto:shoppdogg583@gmail.com");
}

#[test]
fn instagram_url_drops_at_sign() {
    assert_eq!(instagram_url("@hibridshopp"), "https://instagram.com/hibridshopp");
    assert_eq!(instagram_url("hibridshopp"), "https://instagram.com/hibridshopp");
}
