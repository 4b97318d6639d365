//! Classifier integration tests
//!
//! One case table per scheme, followed by the precedence conflicts that
//! motivate the rule order and property tests for totality.

use curate_identifiers::{classify, detect, normalize, rule_names, IdentifierType};
use proptest::prelude::*;
use rstest::rstest;

// === Precedence conflicts ===

#[rstest]
#[case("10.60516/sample123", IdentifierType::Igsn)]
#[case("10.1594/WDCC/CERA-DB", IdentifierType::Handle)]
#[case("978-3-16-148410-0", IdentifierType::Isbn)]
#[case("4006381333931", IdentifierType::Ean13)]
#[case("https://doi.org/10.5194/nhess-15-1463-2015", IdentifierType::Doi)]
#[case("arXiv:2501.13958", IdentifierType::Arxiv)]
#[case("hep-th/9901001", IdentifierType::Arxiv)]
#[case("ark:/13960/t5z64fc55", IdentifierType::Ark)]
#[case("PMID: 12345678", IdentifierType::Pmid)]
#[case("not a valid identifier at all", IdentifierType::Url)]
fn test_documented_examples(#[case] input: &str, #[case] expected: IdentifierType) {
    assert_eq!(detect(input), expected, "input: {}", input);
}

#[test]
fn test_igsn_prefix_wins_over_doi() {
    let result = classify("10.58095/XYZ0001");
    assert_eq!(result.kind, IdentifierType::Igsn);
    assert_eq!(result.rule, Some("igsn.doi_prefix"));
    assert_eq!(detect("10.58094/XYZ0001"), IdentifierType::Doi);
}

#[test]
fn test_wdcc_prefix_wins_over_doi() {
    assert_eq!(classify("10.1594/WDCC/CERA-DB").rule, Some("handle.wdcc_prefix"));
    // Through the DOI resolver the generic DOI rule still applies
    assert_eq!(
        detect("https://doi.org/10.1594/PANGAEA.123456"),
        IdentifierType::Doi
    );
}

#[test]
fn test_isbn_range_is_not_ean13() {
    assert_eq!(classify("9780321125217").rule, Some("isbn.bare_13"));
    assert_eq!(classify("9790321125217").rule, Some("isbn.bare_13"));
    assert_eq!(classify("9770321125217").rule, Some("ean13.bare"));
}

#[test]
fn test_w3id_is_not_purl() {
    assert_eq!(detect("https://w3id.org/purl/thing"), IdentifierType::W3id);
    assert_eq!(detect("https://purl.org/w3id/thing"), IdentifierType::Purl);
}

#[test]
fn test_lissn_is_checked_before_eissn() {
    assert_eq!(classify("ISSN-L 2049-3630").rule, Some("lissn.prefixed"));
    assert_eq!(classify("ISSN 2049-3630").rule, Some("eissn.prefixed"));
}

#[test]
fn test_claimed_urn_namespaces_are_excluded() {
    assert_eq!(classify("urn:lsid:ipni.org:names:1").rule, Some("lsid.urn"));
    assert_eq!(classify("urn:nbn:de:1234").rule, Some("urn.generic"));
    // A malformed LSID is not rescued by the generic URN rule
    assert_eq!(classify("urn:lsid:broken").rule, None);
}

#[test]
fn test_doi_with_internal_space_is_url() {
    let result = classify("10.5880 GFZ.1.1");
    assert_eq!(result.kind, IdentifierType::Url);
    assert_eq!(result.rule, Some("doi.internal_space"));
}

#[test]
fn test_resolver_urls_beat_generic_url() {
    assert_eq!(detect("https://hdl.handle.net/11858/00-097C"), IdentifierType::Handle);
    assert_eq!(detect("https://n2t.net/ark:/13960/t5z64fc55"), IdentifierType::Ark);
    assert_eq!(detect("https://example.org/index.html"), IdentifierType::Url);
}

#[test]
fn test_input_is_trimmed() {
    assert_eq!(detect("  10.5880/GFZ.1.1\n"), IdentifierType::Doi);
    assert_eq!(detect("\tarXiv:2501.13958 "), IdentifierType::Arxiv);
}

#[test]
fn test_rule_table_starts_with_internal_space_guard() {
    let names = rule_names();
    let position = |name: &str| names.iter().position(|n| *n == name).unwrap();
    assert_eq!(position("doi.internal_space"), 0);
    assert!(position("igsn.doi_prefix") < position("doi.bare"));
    assert!(position("handle.wdcc_prefix") < position("doi.bare"));
    assert!(position("isbn.bare_13") < position("ean13.bare"));
    assert!(position("w3id.url") < position("purl.org_url"));
    assert!(position("lissn.prefixed") < position("eissn.prefixed"));
    assert!(position("url.http") < position("handle.bare"));
}

// === Per-scheme recognition ===

#[rstest]
#[case("10.5880/GFZ.1.1")]
#[case("doi:10.1000/182")]
#[case("DOI: 10.1038/nature12373")]
#[case("https://dx.doi.org/10.5880/GFZ.1.1")]
#[case("http://doi.org/10.1126/science.1234567")]
#[case("10.1000.10/abc")]
fn test_detects_doi(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Doi, "input: {}", input);
}

#[rstest]
#[case("10.58052/IEUUH0001")]
#[case("https://doi.org/10.60510/ICDP5054EEW1001")]
#[case("10.273/BGRB5054RX05201")]
#[case("https://hdl.handle.net/10.273/CNR0001")]
#[case("igsn:AU1243")]
#[case("IGSN SSH000SUA")]
#[case("urn:igsn:GFZ000001ABC")]
#[case("AU1243")]
#[case("SSH000SUA")]
#[case("BGRB5054RX05201")]
#[case("ICDP5054EEW1001")]
#[case("CSRWA0001")]
#[case("GFZ000001ABC")]
#[case("MBCRPR0001")]
#[case("ARDC123456")]
#[case("https://igsn.org/AU1243")]
#[case("doi:10.60516/sample123")]
#[case("DOI: 10.58052/abc")]
#[case("doi:10.273/BGRB5054RX05201")]
fn test_detects_igsn(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Igsn, "input: {}", input);
}

#[rstest]
#[case("https://hdl.handle.net/11858/00-097C-0000-0001-4F0E-5")]
#[case("https://hdl.handle.net/api/handles/21.T11148/abc")]
#[case("https://hdl.handle.net/20.500.12345/678?noredirect")]
#[case("hdl://21.T11148/abc")]
#[case("urn:handle:11858/00-097C")]
#[case("https://repo.example.org/objects/21.T11998/abc-123")]
#[case("11858/00-097C-0000-0001-4F0E-5")]
#[case("21.T11148/abc")]
#[case("10.123/abc")]
fn test_detects_handle(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Handle, "input: {}", input);
}

#[rstest]
#[case("https://arxiv.org/abs/2501.13958")]
#[case("https://arxiv.org/pdf/2501.13958v2")]
#[case("arxiv:hep-th/9901001")]
#[case("2501.13958")]
#[case("2501.13958v3")]
#[case("0704.0001")]
#[case("math.AG/0101001")]
#[case("cond-mat/9901001v2")]
fn test_detects_arxiv(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Arxiv, "input: {}", input);
}

#[rstest]
#[case("2024ApJ...123..456A")]
#[case("1970ApJ...161L..77K")]
#[case("https://ui.adsabs.harvard.edu/abs/2024ApJ...123..456A/abstract")]
#[case("2023arXiv230112345S")]
#[case("2019PhDT.........5S")]
#[case("2015EGUGA..1712345A")]
fn test_detects_bibcode(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Bibcode, "input: {}", input);
}

#[rstest]
#[case("CSTR:31253.11.sciencedb.j00001.00123")]
#[case("31253.11.sciencedb.j00001.00123")]
#[case("https://identifiers.org/cstr:31253.11.sciencedb.j00001.00123")]
#[case("https://bioregistry.io/cstr:31253.11.x.y")]
fn test_detects_cstr(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Cstr, "input: {}", input);
}

#[rstest]
#[case("9780321125217")]
#[case("979-10-90636-07-1")]
#[case("0-306-40615-2")]
#[case("080442957X")]
#[case("ISBN 978-0-321-12521-7")]
#[case("ISBN-13: 978-0-321-12521-7")]
#[case("ISBN-10: 0-306-40615-2")]
#[case("urn:isbn:9780321125217")]
#[case("https://books.openedition.org/isbn/9782821855236")]
#[case("https://identifiers.org/isbn:9780321125217")]
fn test_detects_isbn(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Isbn, "input: {}", input);
}

#[rstest]
#[case("5901234123457")]
#[case("urn:ean13:4006381333931")]
#[case("urn:gtin-13:4006381333931")]
#[case("urn:gtin:4006381333931")]
#[case("https://identifiers.org/ean13:4006381333931")]
#[case("https://id.gs1.org/01/04006381333931")]
#[case("9771234567003")]
fn test_detects_ean13(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Ean13, "input: {}", input);
}

#[rstest]
#[case("urn:lsid:ipni.org:names:37829-1:1.3")]
#[case("urn:lsid:zoobank.org:pub:CDC8D258-8F57-41DC-B560-247E17D3DC8C")]
#[case("https://lsid.io/urn:lsid:ipni.org:names:37829-1")]
#[case("http://example.org/authority/ServiceLocator?lsid=urn:lsid:example.org:ns:1")]
#[case("https://zoobank.org/References/CDC8D258-8F57-41DC-B560-247E17D3DC8C")]
#[case("http://lsid.tdwg.org/summary/urn:lsid:ipni.org:names:1")]
fn test_detects_lsid(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Lsid, "input: {}", input);
}

#[rstest]
#[case("https://pubmed.ncbi.nlm.nih.gov/12345678/")]
#[case("https://www.ncbi.nlm.nih.gov/pubmed/12345678")]
#[case("PMID:12345678")]
#[case("PubMed ID: 12345678")]
#[case("12345678 [pmid]")]
#[case("http://www.ncbi.nlm.nih.gov/entrez/query.fcgi?cmd=Retrieve&db=PubMed&list_uids=12345678")]
fn test_detects_pmid(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Pmid, "input: {}", input);
}

#[rstest]
#[case("https://w3id.org/example/ontology")]
fn test_detects_w3id(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::W3id, "input: {}", input);
}

#[rstest]
#[case("https://purl.org/dc/terms/")]
#[case("http://purl.oclc.org/NET/example")]
#[case("https://purl.lib.example.edu/item/1")]
#[case("http://purl.obolibrary.org/obo/GO_0008150")]
#[case("https://purl.stanford.edu/abc123")]
fn test_detects_purl(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Purl, "input: {}", input);
}

#[rstest]
#[case("RRID:AB_2298772")]
#[case("RRID:SCR_012345")]
#[case("RRID:IMSR_JAX:000664")]
#[case("RRID: CVCL_0033")]
#[case("https://scicrunch.org/resolver/RRID:AB_2298772")]
#[case("https://rrid.site/data/record/nlx_144509-1/SCR_012345/resolver")]
fn test_detects_rrid(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Rrid, "input: {}", input);
}

#[rstest]
#[case("UPC 036000291452")]
#[case("UPC-A: 0-36000-29145-2")]
#[case("GTIN-12 036000291452")]
#[case("UPC-E 01234565")]
fn test_detects_upc(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Upc, "input: {}", input);
}

#[rstest]
#[case("https://portal.issn.org/resource/ISSN-L/2049-3630")]
#[case("ISSN-L 2049-3630")]
#[case("LISSN: 2049-3630")]
fn test_detects_lissn(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Lissn, "input: {}", input);
}

#[rstest]
#[case("https://portal.issn.org/resource/ISSN/2049-3630")]
#[case("urn:issn:2049-3630")]
#[case("EISSN 2049-3630")]
#[case("e-ISSN: 1234-567X")]
#[case("ISSN 0317-8471 (Print)")]
#[case("p-ISSN 0317-8471")]
#[case("2049-3630")]
#[case("1234567X")]
#[case("https://www.worldcat.org/issn/2049-3630")]
#[case("https://identifiers.org/issn:2049-3630")]
#[case("ISSN 2049-3630 (Online)")]
fn test_detects_eissn(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Eissn, "input: {}", input);
}

#[rstest]
#[case("0A9-2009-12B4A105-7")]
#[case("0A9-2009-12B4-A105-7")]
#[case("ISTC 0A9-2009-12B4A105-7")]
#[case("urn:istc:0A9200912B4A1057")]
#[case("0A9200912B4A1057")]
#[case("0A9200912b4a1057")]
#[case("0a9200912b4a1057")]
fn test_detects_istc(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Istc, "input: {}", input);
}

#[rstest]
#[case("https://n2t.net/ark:/13960/t5z64fc55")]
#[case("https://example.org/ark:/12345/xyz")]
#[case("ark:13960/t5z64fc55")]
fn test_detects_ark(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Ark, "input: {}", input);
}

#[rstest]
#[case("urn:nbn:de:kobv:83-opus-12345")]
#[case("https://nbn-resolving.org/urn:nbn:de:kobv:83-opus-12345")]
#[case("https://urn.fi/URN:NBN:fi-fe2019")]
#[case("https://urn.kb.se/resolve?urn=urn:nbn:se:uu:diva-1")]
#[case("https://persistent-identifier.nl/urn:nbn:nl:ui:1")]
#[case("https://n2t.net/urn:example:1")]
#[case("urn:uuid:6e8bc430-9c3a-11d9-9669-0800200c9a66")]
fn test_detects_urn(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Urn, "input: {}", input);
}
#[rstest]
#[case("https://example.org/page")]
#[case("http://example.com")]
#[case("10.5880/GFZ 1.1")]
fn test_detects_url(#[case] input: &str) {
    assert_eq!(detect(input), IdentifierType::Url, "input: {}", input);
}

// === Fallback ===

#[rstest]
#[case("something/else", IdentifierType::Doi)]
#[case("20.500.12345/xyz", IdentifierType::Doi)]
#[case("ftp://example.org/file", IdentifierType::Doi)]
#[case("a b/c", IdentifierType::Url)]
#[case("plainword", IdentifierType::Url)]
#[case("urn:issn:abc", IdentifierType::Url)]
#[case("", IdentifierType::Url)]
#[case("   ", IdentifierType::Url)]
fn test_fallback(#[case] input: &str, #[case] expected: IdentifierType) {
    let result = classify(input);
    assert_eq!(result.kind, expected, "input: {:?}", input);
    assert_eq!(result.rule, None, "input: {:?}", input);
}

#[test]
fn test_classification_serializes_kind_and_rule() {
    let json = serde_json::to_value(classify("arXiv:2501.13958")).unwrap();
    assert_eq!(json["kind"], "arXiv");
    assert_eq!(json["rule"], "arxiv.prefixed");
}

// === Properties ===

proptest! {
    #[test]
    fn test_detect_is_total(input in ".*") {
        let _ = detect(&input);
    }

    #[test]
    fn test_detect_is_deterministic(input in ".{0,40}") {
        prop_assert_eq!(detect(&input), detect(&input));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored(input in "[ -~]{0,40}") {
        let padded = format!("  {}\t\n", input);
        prop_assert_eq!(detect(&padded), detect(&input));
    }

    #[test]
    fn test_bare_dois_are_detected(registrant in "[1-9][0-9]{4}", suffix in "[A-Za-z0-9.]{1,12}") {
        prop_assume!(!["60516", "58052", "60510", "58108", "58095"].contains(&registrant.as_str()));
        let doi = format!("10.{}/{}", registrant, suffix);
        prop_assert_eq!(detect(&doi), IdentifierType::Doi);
        prop_assert_eq!(detect(&format!("https://doi.org/{}", doi)), IdentifierType::Doi);
        prop_assert_eq!(normalize(&format!("https://doi.org/{}", doi), IdentifierType::Doi), doi);
    }
}
