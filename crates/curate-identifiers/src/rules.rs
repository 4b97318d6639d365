//! Ordered classification rules
//!
//! Each rule pairs a pattern with the scheme it proves. Rules are listed in
//! precedence order: the first rule that matches a trimmed input decides its
//! type. `tier` groups rules that belong to the same precedence step so the
//! ordering can be checked in tests; rules within a tier never overlap in a
//! way that changes the result.
//!
//! `lead` and `literal` are cheap pre-filters. The classifier buckets rules by
//! the first character they can start with and checks `literal` as a
//! case-insensitive prefix before running the regex. Both must be implied by
//! the pattern itself, otherwise the dispatch would skip a rule the linear
//! cascade would have matched.
//!
//! The `regex` crate has no look-around, so exclusions are written as a
//! separate `unless` pattern.

use crate::kind::IdentifierType;
use crate::kind::IdentifierType as T;

/// First-character hint for a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lead {
    /// Candidate when the input starts with an ASCII digit
    Digit,
    /// Candidate when the input starts with an ASCII letter
    Alpha,
    /// Candidate when the input starts with one of these (lowercase) characters
    Chars(&'static str),
}

impl Lead {
    /// Whether a rule with this hint can match an input starting with `first`
    pub(crate) fn admits(self, first: char) -> bool {
        match self {
            Lead::Digit => first.is_ascii_digit(),
            Lead::Alpha => first.is_ascii_alphabetic(),
            Lead::Chars(set) => set.contains(first.to_ascii_lowercase()),
        }
    }
}

/// One entry of the classification table
#[derive(Debug, Clone, Copy)]
pub(crate) struct RuleSpec {
    pub name: &'static str,
    pub tier: u8,
    pub kind: IdentifierType,
    pub lead: Lead,
    pub literal: Option<&'static str>,
    pub pattern: &'static str,
    pub unless: Option<&'static str>,
}

const fn rule(
    name: &'static str,
    tier: u8,
    kind: IdentifierType,
    lead: Lead,
    pattern: &'static str,
) -> RuleSpec {
    RuleSpec {
        name,
        tier,
        kind,
        lead,
        literal: None,
        pattern,
        unless: None,
    }
}

/// Rule for an `http(s)://` resolver form
const fn web(name: &'static str, tier: u8, kind: IdentifierType, pattern: &'static str) -> RuleSpec {
    rule(name, tier, kind, Lead::Chars("h"), pattern).literal("http")
}

impl RuleSpec {
    const fn literal(self, literal: &'static str) -> Self {
        RuleSpec {
            literal: Some(literal),
            ..self
        }
    }

    const fn unless(self, unless: &'static str) -> Self {
        RuleSpec {
            unless: Some(unless),
            ..self
        }
    }
}

/// The classification table in precedence order
pub(crate) const RULES: &[RuleSpec] = &[
    // DOI-shaped input broken by whitespace is free text, not a DOI
    rule("doi.internal_space", 1, T::Url, Lead::Chars("1"), r"^10\.\S*\s").literal("10."),
    // IGSN allocators registered DOI prefixes, so they must win over DOI
    rule(
        "igsn.doi_prefix",
        2,
        T::Igsn,
        Lead::Chars("1dh"),
        r"(?i)^(?:https?://(?:dx\.)?doi\.org/|doi:\s*)?10\.(?:60516|58052|60510|58108|58095)/\S+$",
    ),
    rule(
        "igsn.legacy_handle",
        2,
        T::Igsn,
        Lead::Chars("1dh"),
        r"(?i)^(?:https?://(?:hdl\.handle\.net|(?:dx\.)?doi\.org)/|doi:\s*)?10\.273/\S+$",
    ),
    web("igsn.resolver_url", 2, T::Igsn, r"(?i)^https?://(?:www\.)?igsn\.org/\S+$"),
    rule(
        "igsn.prefixed",
        2,
        T::Igsn,
        Lead::Chars("iu"),
        r"(?i)^(?:igsn:\s*|igsn\s+|urn:igsn:)\S+$",
    ),
    // Heuristic: institutional allocator codes, uppercase only. Kept for
    // compatibility even though it also claims words such as `AUTHOR`.
    rule(
        "igsn.allocator_code",
        2,
        T::Igsn,
        Lead::Chars("abcgims"),
        r"^(?:AU|SSH|BGR|ICDP|CSR|GFZ|MBCR|ARDC)[A-Z0-9][A-Z0-9._\-]{2,}$",
    ),
    // WDCC registered its Handle prefix in DOI shape
    rule("handle.wdcc_prefix", 3, T::Handle, Lead::Chars("1"), r"^10\.1594/\S+$")
        .literal("10.1594/"),
    web(
        "doi.resolver_url",
        4,
        T::Doi,
        r"(?i)^https?://(?:dx\.)?doi\.org/10\.\d{4,}(?:\.\d+)*/\S+$",
    ),
    rule(
        "doi.prefixed",
        4,
        T::Doi,
        Lead::Chars("d"),
        r"(?i)^doi:\s*10\.\d{4,}(?:\.\d+)*/\S+$",
    )
    .literal("doi:"),
    rule("doi.bare", 4, T::Doi, Lead::Chars("1"), r"^10\.\d{4,}(?:\.\d+)*/\S+$").literal("10."),
    web(
        "arxiv.url",
        5,
        T::Arxiv,
        r"(?i)^https?://(?:www\.|export\.)?arxiv\.org/(?:abs|pdf|html|src)/\S+$",
    ),
    rule(
        "arxiv.prefixed",
        5,
        T::Arxiv,
        Lead::Chars("a"),
        r"(?i)^arxiv:\s*(?:\d{4}\.\d{4,5}(?:v\d+)?|[a-z]+(?:-[a-z]+)*(?:\.[a-z]{2})?/\d{7}(?:v\d+)?)$",
    )
    .literal("arxiv:"),
    rule(
        "arxiv.bare_new",
        5,
        T::Arxiv,
        Lead::Digit,
        r"^\d{2}(?:0[1-9]|1[0-2])\.\d{4,5}(?:v\d+)?$",
    ),
    rule(
        "arxiv.bare_old",
        5,
        T::Arxiv,
        Lead::Alpha,
        r"^[a-z]+(?:-[a-z]+)*(?:\.[A-Za-z]{2})?/\d{7}(?:v\d+)?$",
    ),
    web(
        "bibcode.ads_url",
        6,
        T::Bibcode,
        r"(?i)^https?://(?:ui\.|www\.)?(?:adsabs\.harvard\.edu|scixplorer\.org)/(?:#)?abs/\S+$",
    ),
    // YYYY JJJJJ VVVV M PPPP A
    rule(
        "bibcode.compact",
        6,
        T::Bibcode,
        Lead::Digit,
        r"^\d{4}[A-Za-z&][A-Za-z0-9&.]{4}[A-Za-z0-9.]{4}[A-Za-z0-9.][A-Za-z0-9.]{4}[A-Za-z.]$",
    ),
    rule(
        "bibcode.special_journal",
        6,
        T::Bibcode,
        Lead::Digit,
        r"^\d{4}(?:arXiv|PhDT|MsT|BaTh|yCat|ascl|zndo|EGUGA|AGUFM|AAS|DPS|sptz|cxo|hst|jwst)[A-Za-z0-9.&:]{4,16}[A-Za-z.]$",
    ),
    web(
        "cstr.resolver_url",
        7,
        T::Cstr,
        r"(?i)^https?://(?:identifiers\.org|bioregistry\.io)/cstr:\S+$",
    ),
    rule("cstr.prefixed", 7, T::Cstr, Lead::Chars("c"), r"(?i)^cstr:\s*\S+$").literal("cstr:"),
    rule(
        "cstr.bare",
        7,
        T::Cstr,
        Lead::Digit,
        r"^\d{5}\.\d{2}\.[A-Za-z0-9_\-]+\.\S+$",
    ),
    // ISBN-13 lives inside the EAN-13 space, so it is tested first
    web(
        "isbn.openedition_url",
        8,
        T::Isbn,
        r"(?i)^https?://(?:www\.)?(?:books\.)?openedition\.org/isbn/[0-9\-]{9,17}[0-9x]$",
    ),
    web(
        "isbn.identifiers_org_url",
        8,
        T::Isbn,
        r"(?i)^https?://identifiers\.org/isbn:\S+$",
    ),
    rule("isbn.urn", 8, T::Isbn, Lead::Chars("u"), r"(?i)^urn:isbn:\S+$").literal("urn:isbn:"),
    rule(
        "isbn.prefixed",
        8,
        T::Isbn,
        Lead::Chars("i"),
        r"(?i)^isbn(?:-1[03])?\s*:?\s*[0-9][0-9\- ]{8,15}[0-9x]$",
    )
    .literal("isbn"),
    rule("isbn.bare_13", 8, T::Isbn, Lead::Chars("9"), r"^97[89](?:[\- ]?\d){10}$"),
    rule("isbn.bare_10", 8, T::Isbn, Lead::Digit, r"^\d(?:[\- ]?\d){8}[\- ]?[\dXx]$"),
    web(
        "ean13.identifiers_org_url",
        9,
        T::Ean13,
        r"(?i)^https?://identifiers\.org/ean13:\d{13}$",
    ),
    web(
        "ean13.gs1_url",
        9,
        T::Ean13,
        r"(?i)^https?://(?:id\.)?gs1\.org/(?:01|gtin)/\d{13,14}(?:/\S*)?$",
    ),
    rule(
        "ean13.urn",
        9,
        T::Ean13,
        Lead::Chars("u"),
        r"(?i)^urn:(?:ean13|gtin(?:-13)?):\d{13}$",
    )
    .literal("urn:"),
    // 13 digits outside the 978/979 Bookland range
    rule(
        "ean13.bare",
        9,
        T::Ean13,
        Lead::Digit,
        r"^(?:[0-8]\d{12}|9[0-689]\d{11}|97[0-7]\d{10})$",
    ),
    rule(
        "lsid.urn",
        10,
        T::Lsid,
        Lead::Chars("u"),
        r"(?i)^urn:lsid:[^:\s]+:[^:\s]+:[^:\s]+(?::[^:\s]+)?$",
    )
    .literal("urn:lsid:"),
    web("lsid.lsid_io_url", 10, T::Lsid, r"(?i)^https?://(?:www\.)?lsid\.io/urn:lsid:\S+$"),
    web(
        "lsid.service_locator_url",
        10,
        T::Lsid,
        r"(?i)^https?://\S+/servicelocator\S*[?&]lsid=urn:lsid:\S+$",
    ),
    web(
        "lsid.tdwg_url",
        10,
        T::Lsid,
        r"(?i)^https?://lsid\.tdwg\.org/(?:summary/)?urn:lsid:\S+$",
    ),
    web(
        "lsid.zoobank_url",
        10,
        T::Lsid,
        r"(?i)^https?://(?:www\.)?zoobank\.org/(?:[a-z]+/)?(?:urn:lsid:zoobank\.org:\S+|[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})$",
    ),
    web(
        "pmid.pubmed_url",
        11,
        T::Pmid,
        r"(?i)^https?://(?:www\.)?(?:pubmed\.ncbi\.nlm\.nih\.gov|ncbi\.nlm\.nih\.gov/pubmed)/\d{1,9}/?(?:\?\S*)?$",
    ),
    web(
        "pmid.entrez_url",
        11,
        T::Pmid,
        r"(?i)^https?://(?:www\.)?ncbi\.nlm\.nih\.gov/entrez/query\.fcgi\?\S*list_uids=\d+\S*$",
    ),
    web(
        "pmid.identifiers_org_url",
        11,
        T::Pmid,
        r"(?i)^https?://identifiers\.org/(?:pubmed|pmid):\d+$",
    ),
    rule(
        "pmid.prefixed",
        11,
        T::Pmid,
        Lead::Chars("p"),
        r"(?i)^(?:pmid|pubmed\s*id)\s*:?\s*\d{1,9}$",
    ),
    rule(
        "pmid.search_field",
        11,
        T::Pmid,
        Lead::Digit,
        r"(?i)^\d{1,9}\s*\[(?:pmid|pubmed|uid)\]$",
    ),
    // w3id before PURL: both are redirect services with the same URL shape
    web("w3id.url", 12, T::W3id, r"(?i)^https?://(?:www\.)?w3id\.org/\S+$"),
    web("purl.org_url", 13, T::Purl, r"(?i)^https?://(?:www\.)?purl\.org/\S+$"),
    web("purl.oclc_url", 13, T::Purl, r"(?i)^https?://purl\.oclc\.org/\S+$"),
    web("purl.library_url", 13, T::Purl, r"(?i)^https?://purl\.lib\.[a-z0-9.\-]+/\S+$"),
    web(
        "purl.institutional_url",
        13,
        T::Purl,
        r"(?i)^https?://purl\.[a-z0-9\-]+\.(?:org|edu)/\S+$",
    ),
    // Authority codes may be compound, e.g. IMSR_JAX:000664
    rule(
        "rrid.prefixed",
        14,
        T::Rrid,
        Lead::Chars("r"),
        r"(?i)^rrid:\s*[a-z]+(?:_[a-z]+)?[_:][a-z0-9_\-:.]+$",
    )
    .literal("rrid:"),
    web(
        "rrid.scicrunch_url",
        14,
        T::Rrid,
        r"(?i)^https?://(?:www\.)?scicrunch\.org/resolver/(?:rrid:)?[a-z]+(?:_[a-z]+)?[_:]\S+$",
    ),
    web("rrid.site_url", 14, T::Rrid, r"(?i)^https?://(?:www\.)?rrid\.site/\S+$"),
    web(
        "rrid.identifiers_org_url",
        14,
        T::Rrid,
        r"(?i)^https?://identifiers\.org/rrid[:/]\S+$",
    ),
    rule(
        "upc.upc_e",
        15,
        T::Upc,
        Lead::Chars("u"),
        r"(?i)^upc-e\s*:?\s*\d(?:[\- ]?\d){7}$",
    )
    .literal("upc-e"),
    rule(
        "upc.upc_a",
        15,
        T::Upc,
        Lead::Chars("gu"),
        r"(?i)^(?:upc(?:-a)?|gtin-12)\s*:?\s*\d(?:[\- ]?\d){11}$",
    ),
    // ISSN-L before the generic ISSN forms
    web(
        "lissn.portal_url",
        16,
        T::Lissn,
        r"(?i)^https?://portal\.issn\.org/resource/issn-l/\d{4}-?\d{3}[\dx]$",
    ),
    rule(
        "lissn.prefixed",
        16,
        T::Lissn,
        Lead::Chars("il"),
        r"(?i)^(?:lissn|issn-l)\s*:?\s*\d{4}-?\d{3}[\dx]$",
    ),
    web(
        "eissn.portal_url",
        17,
        T::Eissn,
        r"(?i)^https?://portal\.issn\.org/resource/issn/\d{4}-?\d{3}[\dx]$",
    ),
    web(
        "eissn.identifiers_org_url",
        17,
        T::Eissn,
        r"(?i)^https?://identifiers\.org/issn:\d{4}-?\d{3}[\dx]$",
    ),
    web(
        "eissn.worldcat_url",
        17,
        T::Eissn,
        r"(?i)^https?://(?:www\.)?worldcat\.org/issn/\d{4}-?\d{3}[\dx]$",
    ),
    rule("eissn.urn", 17, T::Eissn, Lead::Chars("u"), r"(?i)^urn:issn:\d{4}-?\d{3}[\dx]$")
        .literal("urn:issn:"),
    rule(
        "eissn.prefixed",
        17,
        T::Eissn,
        Lead::Chars("eip"),
        r"(?i)^(?:e-?issn|p-issn|issn)\s*:?\s*\d{4}-?\d{3}[\dx](?:\s*\((?:online|print)\))?$",
    ),
    rule("eissn.bare_hyphenated", 17, T::Eissn, Lead::Digit, r"(?i)^\d{4}-\d{3}[\dx]$"),
    rule("eissn.bare_compact", 17, T::Eissn, Lead::Digit, r"(?i)^\d{7}[\dx]$"),
    rule(
        "istc.urn",
        18,
        T::Istc,
        Lead::Chars("u"),
        r"(?i)^urn:istc:[0-9a-f\-]{16,20}$",
    )
    .literal("urn:istc:"),
    rule(
        "istc.prefixed",
        18,
        T::Istc,
        Lead::Chars("i"),
        r"(?i)^istc\s*:?\s*[0-9a-f]{3}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]$",
    )
    .literal("istc"),
    // registrant - year - work - check
    rule(
        "istc.hyphenated",
        18,
        T::Istc,
        Lead::Chars("0123456789abcdef"),
        r"(?i)^[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{4}-?[0-9a-f]{4}-[0-9a-f]$",
    ),
    rule(
        "istc.compact",
        18,
        T::Istc,
        Lead::Chars("0123456789abcdef"),
        r"(?i)^[0-9a-f]{16}$",
    ),
    web("ark.resolver_url", 19, T::Ark, r"(?i)^https?://\S+/ark:/?\d{5,}/\S+$"),
    rule("ark.compact", 19, T::Ark, Lead::Chars("a"), r"(?i)^ark:/?\d{5,}/\S+$").literal("ark:"),
    web(
        "handle.resolver_url",
        20,
        T::Handle,
        r"(?i)^https?://hdl\.handle\.net/(?:api/handles/)?[0-9][0-9a-z.]*/\S+$",
    ),
    rule(
        "handle.hdl_scheme",
        20,
        T::Handle,
        Lead::Chars("h"),
        r"(?i)^hdl://[0-9][0-9a-z.]*/\S+$",
    )
    .literal("hdl://"),
    rule(
        "handle.urn",
        20,
        T::Handle,
        Lead::Chars("u"),
        r"(?i)^urn:handle:[0-9][0-9a-z.]*/\S+$",
    )
    .literal("urn:handle:"),
    web(
        "handle.objects_path_url",
        20,
        T::Handle,
        r"(?i)^https?://[^\s/]+/objects/\d+(?:\.[0-9a-z]+)*/\S+$",
    ),
    web(
        "urn.dnb_resolver_url",
        21,
        T::Urn,
        r"(?i)^https?://(?:www\.)?nbn-resolving\.(?:org|de)/(?:resolver\?\S*identifier=)?urn:\S+$",
    ),
    web("urn.fi_resolver_url", 21, T::Urn, r"(?i)^https?://(?:www\.)?urn\.fi/urn:\S+$"),
    web(
        "urn.kb_resolver_url",
        21,
        T::Urn,
        r"(?i)^https?://(?:www\.)?urn\.kb\.se/resolve\?\S*urn=urn:\S+$",
    ),
    web(
        "urn.nl_resolver_url",
        21,
        T::Urn,
        r"(?i)^https?://(?:www\.)?persistent-identifier\.nl/(?:\?identifier=)?urn:\S+$",
    ),
    web("urn.n2t_url", 21, T::Urn, r"(?i)^https?://(?:www\.)?n2t\.net/urn:\S+$"),
    // Namespaces with a dedicated scheme never fall back to URN
    rule(
        "urn.generic",
        21,
        T::Urn,
        Lead::Chars("u"),
        r"(?i)^urn:[a-z0-9][a-z0-9\-]{0,31}:\S+$",
    )
    .literal("urn:")
    .unless(r"(?i)^urn:(?:isbn|lsid|igsn|issn|istc|handle):"),
    web("url.http", 22, T::Url, r"(?i)^https?://\S+$"),
    rule("handle.bare", 23, T::Handle, Lead::Digit, r"^\d+(?:\.[A-Za-z0-9]+)?/\S+$"),
];
