use super::writer::XmlWriter;
use super::{API_NS, COMMON_NS};
use crate::core::{DigestError, InvoiceQueryParams, MandatoryQueryParams};
use crate::envelope::{DigestRequest, RequestHeader, SoftwareInfo, UserHeader};

/// Render a digest request as a protocol XML document.
pub fn to_request_xml(request: &DigestRequest) -> Result<String, DigestError> {
    let root = request.base.request_type.as_str();
    let mut w = XmlWriter::new()?;
    w.start_element_with_attrs(root, &[("xmlns", API_NS), ("xmlns:common", COMMON_NS)])?;

    write_header(&mut w, &request.base.header)?;
    write_user(&mut w, &request.base.user)?;
    write_software(&mut w, &request.base.software)?;

    w.text_element("page", &request.query.page.to_string())?;
    w.text_element("invoiceDirection", request.query.invoice_direction.code())?;
    write_query_params(&mut w, &request.query.invoice_query_params)?;

    w.end_element(root)?;
    w.into_string()
}

fn write_header(w: &mut XmlWriter, header: &RequestHeader) -> Result<(), DigestError> {
    w.start_element("common:header")?;
    w.text_element("common:requestId", &header.request_id)?;
    w.text_element("common:timestamp", &header.timestamp_string())?;
    w.text_element("common:requestVersion", &header.request_version)?;
    w.text_element("common:headerVersion", &header.header_version)?;
    w.end_element("common:header")?;
    Ok(())
}

fn write_user(w: &mut XmlWriter, user: &UserHeader) -> Result<(), DigestError> {
    w.start_element("common:user")?;
    w.text_element("common:login", &user.login)?;
    w.text_element_with_attrs(
        "common:passwordHash",
        &user.password_hash,
        &[("cryptoType", "SHA-512")],
    )?;
    w.text_element("common:taxNumber", &user.tax_number)?;
    if let Some(signature) = &user.request_signature {
        w.text_element_with_attrs(
            "common:requestSignature",
            signature,
            &[("cryptoType", "SHA3-512")],
        )?;
    }
    w.end_element("common:user")?;
    Ok(())
}

fn write_software(w: &mut XmlWriter, software: &SoftwareInfo) -> Result<(), DigestError> {
    w.start_element("software")?;
    w.text_element("softwareId", &software.software_id)?;
    w.text_element("softwareName", &software.software_name)?;
    w.text_element("softwareOperation", software.software_operation.code())?;
    w.text_element("softwareMainVersion", &software.software_main_version)?;
    w.text_element("softwareDevName", &software.software_dev_name)?;
    w.text_element("softwareDevContact", &software.software_dev_contact)?;
    w.optional_text_element(
        "softwareDevCountryCode",
        software.software_dev_country_code.as_deref(),
    )?;
    w.optional_text_element(
        "softwareDevTaxNumber",
        software.software_dev_tax_number.as_deref(),
    )?;
    w.end_element("software")?;
    Ok(())
}

fn write_query_params(w: &mut XmlWriter, params: &InvoiceQueryParams) -> Result<(), DigestError> {
    if params.is_empty() {
        w.empty_element("invoiceQueryParams")?;
        return Ok(());
    }
    w.start_element("invoiceQueryParams")?;

    if let Some(mandatory) = &params.mandatory_query_params {
        w.start_element("mandatoryQueryParams")?;
        match mandatory {
            MandatoryQueryParams::InvoiceIssueDate(range) => {
                w.start_element("invoiceIssueDate")?;
                w.optional_text_element("dateFrom", range.date_from.as_deref())?;
                w.optional_text_element("dateTo", range.date_to.as_deref())?;
                w.end_element("invoiceIssueDate")?;
            }
            MandatoryQueryParams::InsDate(range) => {
                w.start_element("insDate")?;
                w.text_element("dateTimeFrom", &range.date_time_from)?;
                w.text_element("dateTimeTo", &range.date_time_to)?;
                w.end_element("insDate")?;
            }
        }
        w.end_element("mandatoryQueryParams")?;
    }

    if let Some(additional) = &params.additional_query_params {
        w.start_element("additionalQueryParams")?;
        w.optional_text_element("taxNumber", additional.tax_number.as_deref())?;
        w.optional_text_element(
            "groupMemberTaxNumber",
            additional.group_member_tax_number.as_deref(),
        )?;
        w.optional_text_element("name", additional.name.as_deref())?;
        w.optional_text_element("invoiceCategory", additional.invoice_category.as_deref())?;
        w.optional_text_element("paymentMethod", additional.payment_method.as_deref())?;
        w.optional_text_element(
            "invoiceAppearance",
            additional.invoice_appearance.as_deref(),
        )?;
        w.optional_text_element("source", additional.source.as_deref())?;
        w.optional_text_element("currency", additional.currency.as_deref())?;
        w.end_element("additionalQueryParams")?;
    }

    if let Some(transaction) = &params.transaction_query_params {
        w.start_element("transactionQueryParams")?;
        w.optional_text_element("transactionId", transaction.transaction_id.as_deref())?;
        if let Some(index) = transaction.index {
            w.text_element("index", &index.to_string())?;
        }
        w.optional_text_element(
            "invoiceOperation",
            transaction.invoice_operation.as_deref(),
        )?;
        w.end_element("transactionQueryParams")?;
    }

    w.end_element("invoiceQueryParams")?;
    Ok(())
}
