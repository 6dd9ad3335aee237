#![cfg(feature = "xml")]

use chrono::{TimeZone, Utc};
use nav_digest::core::*;
use nav_digest::envelope::*;
use nav_digest::xml;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fixed_request(params: &QueryParameters) -> DigestRequest {
    let header = RequestHeader::new(
        "RID20240615100000ABC",
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap(),
    );
    let software = SoftwareBuilder::new("HU12345678-00001", "Billing", "1.0")
        .developer("ACME Kft.", "dev@acme.hu")
        .dev_country_code("HU")
        .build();
    let base = BaseRequest::new(
        REQUEST_TYPE,
        header,
        &Credentials::new("techuser", "PWHASH", "12345678"),
        &software,
    );
    DigestRequest::new(base, compose_request(1, InvoiceDirection::Outbound, params))
}

const TWO_ENTRY_REPLY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<QueryInvoiceDigestResponse xmlns="http://schemas.nav.gov.hu/OSA/3.0/api" xmlns:ns2="http://schemas.nav.gov.hu/NTCA/1.0/common">
  <ns2:header>
    <ns2:requestId>RID20240615100000ABC</ns2:requestId>
    <ns2:timestamp>2024-06-15T10:00:01.000Z</ns2:timestamp>
    <ns2:requestVersion>3.0</ns2:requestVersion>
    <ns2:headerVersion>1.0</ns2:headerVersion>
  </ns2:header>
  <ns2:result>
    <ns2:funcCode>OK</ns2:funcCode>
  </ns2:result>
  <invoiceDigestResult>
    <currentPage>1</currentPage>
    <availablePage>3</availablePage>
    <invoiceDigest>
      <invoiceNumber>INV-2024-001</invoiceNumber>
      <invoiceOperation>CREATE</invoiceOperation>
      <invoiceCategory>NORMAL</invoiceCategory>
      <invoiceIssueDate>2024-01-15</invoiceIssueDate>
      <supplierTaxNumber>12345678</supplierTaxNumber>
      <supplierName>ACME Kft.</supplierName>
      <currency>HUF</currency>
      <invoiceNetAmount>1250.50</invoiceNetAmount>
      <invoiceNetAmountHUF>1250.50</invoiceNetAmountHUF>
      <invoiceVatAmountHUF>337.64</invoiceVatAmountHUF>
    </invoiceDigest>
    <invoiceDigest>
      <invoiceNumber>INV-2024-002</invoiceNumber>
      <invoiceOperation>CREATE</invoiceOperation>
      <invoiceNetAmount>100</invoiceNetAmount>
      <invoiceVatAmountHUF>27</invoiceVatAmountHUF>
    </invoiceDigest>
  </invoiceDigestResult>
</QueryInvoiceDigestResponse>"#;

const ONE_ENTRY_REPLY: &str = r#"<QueryInvoiceDigestResponse>
  <result><funcCode>OK</funcCode></result>
  <invoiceDigestResult>
    <currentPage>2</currentPage>
    <availablePage>2</availablePage>
    <invoiceDigest>
      <invoiceNumber>INV-LAST</invoiceNumber>
      <invoiceNetAmount>99.90</invoiceNetAmount>
      <invoiceVatAmountHUF>26.97</invoiceVatAmountHUF>
    </invoiceDigest>
  </invoiceDigestResult>
</QueryInvoiceDigestResponse>"#;

fn normalize_xml(reply_xml: &str) -> QueryOutcome {
    let body = xml::decode_reply(reply_xml).unwrap();
    xml::check_fault(&body).unwrap();
    normalize_response(
        RawReply {
            body,
            request_xml: "<sent/>".into(),
        },
        CoercionPolicy::Lenient,
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Request rendering
// ---------------------------------------------------------------------------

#[test]
fn request_snapshot() {
    let params = QueryParametersBuilder::issue_date_range("2024-01-01", "2024-01-31")
        .tax_number("87654321")
        .currency("HUF")
        .transaction_id("4F7ZKQ3VWJQL1XJA")
        .index(0)
        .build();
    let xml = xml::to_request_xml(&fixed_request(&params)).unwrap();
    insta::assert_snapshot!("digest_request_outbound", xml);
}

#[test]
fn request_declares_namespaces() {
    let xml = xml::to_request_xml(&fixed_request(
        &QueryParametersBuilder::issue_date_range("2024-01-01", "2024-01-31").build(),
    ))
    .unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains(&format!("xmlns=\"{}\"", xml::API_NS)));
    assert!(xml.contains(&format!("xmlns:common=\"{}\"", xml::COMMON_NS)));
    assert!(xml.contains("<common:timestamp>2024-06-15T10:00:00.000Z</common:timestamp>"));
}

#[test]
fn request_escapes_text() {
    let xml = xml::to_request_xml(&fixed_request(
        &QueryParametersBuilder::issue_date_range("2024-01-01", "2024-01-31")
            .name("Kiss & Társa <Kft>")
            .build(),
    ))
    .unwrap();
    assert!(xml.contains("<name>Kiss &amp; Társa &lt;Kft&gt;</name>"));
}

#[test]
fn rendered_request_decodes_back() {
    let params = QueryParametersBuilder::ins_date_range("2024-01-01T00:00:00Z", "2024-01-31T00:00:00Z")
        .invoice_operation("STORNO")
        .build();
    let tree = xml::decode_reply(&xml::to_request_xml(&fixed_request(&params)).unwrap()).unwrap();
    let query = &tree["QueryInvoiceDigestRequest"]["invoiceQueryParams"];
    assert_eq!(
        query["mandatoryQueryParams"]["insDate"]["dateTimeTo"],
        "2024-01-31T00:00:00Z"
    );
    assert_eq!(query["transactionQueryParams"]["invoiceOperation"], "STORNO");
    assert!(query.get("additionalQueryParams").is_none());
    assert_eq!(tree["QueryInvoiceDigestRequest"]["header"]["requestVersion"], "3.0");
}

// ---------------------------------------------------------------------------
// Reply decoding + normalization
// ---------------------------------------------------------------------------

#[test]
fn repeated_digest_elements_normalize_to_list() {
    let result = normalize_xml(TWO_ENTRY_REPLY).into_digest().unwrap();
    assert_eq!(result.current_page, Some(1));
    assert_eq!(result.available_page, Some(3));
    assert_eq!(result.invoice_digest.len(), 2);
    assert_eq!(result.invoice_digest[0].invoice_net_amount, Some(dec!(1250.5)));
    assert_eq!(result.invoice_digest[0].supplier_name.as_deref(), Some("ACME Kft."));
    assert_eq!(result.invoice_digest[1].invoice_vat_amount_huf, Some(dec!(27)));
    assert_eq!(result.request_xml, "<sent/>");
}

#[test]
fn single_digest_element_normalizes_to_list() {
    let tree = xml::decode_reply(ONE_ENTRY_REPLY).unwrap();
    // The decoder collapses a lone element, the normalizer restores the list.
    assert!(tree["QueryInvoiceDigestResponse"]["invoiceDigestResult"]["invoiceDigest"].is_object());

    let result = normalize_xml(ONE_ENTRY_REPLY).into_digest().unwrap();
    assert_eq!(result.invoice_digest.len(), 1);
    assert_eq!(result.invoice_digest[0].invoice_number.as_deref(), Some("INV-LAST"));
    assert_eq!(result.invoice_digest[0].invoice_vat_amount_huf, Some(dec!(26.97)));
    assert!(!result.has_next_page());
}

#[test]
fn reply_without_digest_result() {
    let outcome = normalize_xml(
        "<QueryInvoiceDigestResponse><result><funcCode>OK</funcCode></result></QueryInvoiceDigestResponse>",
    );
    assert_eq!(
        outcome,
        QueryOutcome::NoResult(serde_json::json!({"result": {"funcCode": "OK"}}))
    );
}

#[test]
fn general_error_response_is_remote_error() {
    let body = xml::decode_reply(
        r#"<GeneralErrorResponse xmlns="http://schemas.nav.gov.hu/OSA/3.0/api" xmlns:ns2="http://schemas.nav.gov.hu/NTCA/1.0/common">
  <ns2:result>
    <ns2:funcCode>ERROR</ns2:funcCode>
    <ns2:errorCode>INVALID_REQUEST_SIGNATURE</ns2:errorCode>
    <ns2:message>Helytelen kérés aláírás!</ns2:message>
  </ns2:result>
</GeneralErrorResponse>"#,
    )
    .unwrap();
    let err = xml::check_fault(&body).unwrap_err();
    assert!(matches!(
        err,
        DigestError::Remote { ref code, .. } if code == "INVALID_REQUEST_SIGNATURE"
    ));
    assert!(err.to_string().contains("Helytelen"));
}
