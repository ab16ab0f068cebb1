//! Server-rendered HTML for the inquiry pages.

use std::fmt::Display;

use crate::domains::inquiries::{Inquiry, InquiryForm};
use crate::domains::profiles::Rider;

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn value<T: Display>(value: Option<T>) -> String {
    value.map(|v| escape(&v.to_string())).unwrap_or_default()
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

fn input(name: &str, kind: &str, current: &str) -> String {
    format!(
        "<label>{name}<input type=\"{kind}\" name=\"inquiry[{name}]\" value=\"{current}\"></label>\n"
    )
}

fn rider_field(name: &str, rider: Option<&Rider>) -> String {
    match rider {
        Some(rider) => format!(
            "<p class=\"rider\">{}</p>\n<input type=\"hidden\" name=\"inquiry[{}]\" value=\"{}\">\n",
            escape(&rider.file_name),
            name,
            escape(&rider.item_hash)
        ),
        None => String::new(),
    }
}

/// Application form for a gig.
pub fn inquiry_form(form: &InquiryForm) -> String {
    let draft = &form.inquiry;
    let gig = &draft.gig;
    let mut body = format!(
        "<h1>Apply for {}</h1>\n<form method=\"post\" action=\"/gigs/{}/inquiries\">\n",
        escape(&gig.title),
        gig.id
    );

    if !form.is_matching {
        body.push_str("<p class=\"warning\">Your genres do not match this gig.</p>\n");
    }

    body.push_str(&input(
        "artist_contact",
        "text",
        &value(draft.artist_contact.as_ref()),
    ));
    body.push_str(&input(
        "travel_party_count",
        "number",
        &value(draft.travel_party_count),
    ));
    body.push_str(&input(
        "deal_possible_fee_min",
        "number",
        &value(draft.deal_possible_fee_min),
    ));
    if gig.fixed_fee_option {
        body.push_str(&format!(
            "<div class=\"fixed-fee\" data-min=\"{}\" data-max=\"{}\">\n{}</div>\n",
            gig.fixed_fee_min,
            gig.fixed_fee_max,
            input("fixed_fee", "number", &value(draft.fixed_fee))
        ));
    }
    body.push_str(&format!(
        "<input type=\"hidden\" name=\"inquiry[custom_fields]\" value=\"{}\">\n",
        escape(&draft.custom_fields.to_string())
    ));
    body.push_str(&rider_field(
        "technical_rider_hash",
        draft.technical_rider.as_ref(),
    ));
    body.push_str(&rider_field(
        "catering_rider_hash",
        draft.catering_rider.as_ref(),
    ));

    if let Some(billing) = &form.profile {
        let address = &billing.billing_address;
        body.push_str("<fieldset class=\"billing\">\n<legend>Billing details</legend>\n");
        for (name, field) in [
            ("name", &address.name),
            ("street", &address.street),
            ("zip", &address.zip),
            ("city", &address.city),
            ("country", &address.country),
        ] {
            body.push_str(&format!(
                "<label>{name}<input type=\"text\" name=\"billing_address[{name}]\" value=\"{}\"></label>\n",
                value(field.as_ref())
            ));
        }
        body.push_str(&format!(
            "<label>tax_rate<input type=\"number\" name=\"profile[tax_rate]\" value=\"{}\"></label>\n",
            value(billing.profile.tax_rate)
        ));
        body.push_str("</fieldset>\n");
    }

    body.push_str("<button type=\"submit\">Send inquiry</button>\n</form>\n");
    page(&format!("Apply for {}", gig.title), &body)
}

/// Promoter view of a single inquiry.
pub fn inquiry(inquiry: &Inquiry) -> String {
    let mut body = format!("<h1>Inquiry {}</h1>\n<dl>\n", inquiry.id);
    for (label, field) in [
        ("Contact", value(inquiry.artist_contact.as_ref())),
        ("Travel party", value(inquiry.travel_party_count)),
        ("Minimum fee", value(inquiry.deal_possible_fee_min)),
        ("Fixed fee", value(inquiry.fixed_fee)),
    ] {
        body.push_str(&format!("<dt>{}</dt><dd>{}</dd>\n", label, field));
    }
    body.push_str("</dl>\n");

    for rider in [&inquiry.technical_rider, &inquiry.catering_rider]
        .into_iter()
        .flatten()
    {
        body.push_str(&format!("<p class=\"rider\">{} rider attached</p>\n", rider.kind));
    }

    page(&format!("Inquiry {}", inquiry.id), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ProfileId, UserId};
    use crate::domains::gigs::Gig;
    use crate::domains::inquiries::{InquiryDraft, NewInquiry};
    use crate::domains::profiles::RiderKind;

    fn form(title: &str) -> InquiryForm {
        let gig = Gig::builder()
            .promoter_id(ProfileId::new())
            .title(title)
            .build();
        InquiryForm {
            inquiry: InquiryDraft {
                deal_possible_fee_min: None,
                fixed_fee: None,
                artist_contact: Some("ops@owls.example".to_string()),
                travel_party_count: Some(3),
                custom_fields: gig.custom_fields.clone(),
                technical_rider: None,
                catering_rider: None,
                gig,
            },
            is_matching: true,
            profile: None,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_form_escapes_gig_title_and_prefills() {
        let html = inquiry_form(&form("<script>alert(1)</script>"));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("value=\"ops@owls.example\""));
        assert!(html.contains("value=\"3\""));
        assert!(!html.contains("fixed-fee"));
    }

    #[test]
    fn test_form_carries_rider_hash() {
        let mut form = form("Open Air");
        form.inquiry.technical_rider = Some(
            Rider::builder()
                .profile_id(ProfileId::new())
                .user_id(UserId::new())
                .kind(RiderKind::Technical)
                .item_hash("hash-v3")
                .file_name("stage-plot.pdf")
                .build(),
        );

        let html = inquiry_form(&form);
        assert!(html.contains("name=\"inquiry[technical_rider_hash]\" value=\"hash-v3\""));
        assert!(!html.contains("catering_rider_hash"));
    }

    #[test]
    fn test_inquiry_view() {
        let inquiry = Inquiry::build(
            NewInquiry::builder()
                .gig_id(crate::common::GigId::new())
                .artist_id(ProfileId::new())
                .user_id(UserId::new())
                .promoter_id(ProfileId::new())
                .artist_contact(Some("a&b@example.com".to_string()))
                .build(),
        );

        let html = super::inquiry(&inquiry);
        assert!(html.contains(&format!("Inquiry {}", inquiry.id)));
        assert!(html.contains("a&amp;b@example.com"));
    }
}
