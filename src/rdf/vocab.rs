//! Vocabulary used by the projection engine
//!
//! Predicates and classes are exposed as functions returning owned nodes so
//! callers can drop them straight into a [`Triple`](super::Triple).

use super::types::{NamedNode, RdfPredicate};

pub const REPOSITORY_NAMESPACE: &str = "http://fedora.info/definitions/v4/repository#";
pub const LDP_NAMESPACE: &str = "http://www.w3.org/ns/ldp#";
pub const PREMIS_NAMESPACE: &str = "http://www.loc.gov/premis/rdf/v1#";
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";
pub const EBUCORE_NAMESPACE: &str = "http://www.ebu.ch/metadata/ontologies/ebucore/ebucore#";
pub const VANN_NAMESPACE: &str = "http://purl.org/vocab/vann/";
pub const VOAF_NAMESPACE: &str = "http://purl.org/vocommons/voaf#";
pub const IANA_RELATION_NAMESPACE: &str = "http://www.iana.org/assignments/relation/";

/// Internal (store-side) prefixes bound to the namespaces above.
pub mod prefix {
    pub const REPOSITORY: &str = "fedora";
    pub const LDP: &str = "ldp";
    pub const PREMIS: &str = "premis";
    pub const RDF: &str = "rdf";
    pub const XSD: &str = "xsd";
    pub const EBUCORE: &str = "ebucore";
    pub const JCR: &str = "jcr";
    pub const NT: &str = "nt";
    pub const MIX: &str = "mix";
}

/// Store-side names of the properties that drive LDP membership.
pub mod ldp_property {
    pub const HAS_MEMBER_RELATION: &str = "ldp:hasMemberRelation";
    pub const IS_MEMBER_OF_RELATION: &str = "ldp:isMemberOfRelation";
    pub const MEMBERSHIP_RESOURCE: &str = "ldp:membershipResource";
    pub const INSERTED_CONTENT_RELATION: &str = "ldp:insertedContentRelation";
}

/// Store-side type names used to classify resources.
pub mod node_type {
    pub const CONTAINER: &str = "fedora:Container";
    pub const BINARY: &str = "fedora:Binary";
    pub const DESCRIPTION: &str = "fedora:NonRdfSourceDescription";
    pub const REPOSITORY_ROOT: &str = "fedora:RepositoryRoot";
    pub const BASIC_CONTAINER: &str = "ldp:BasicContainer";
    pub const DIRECT_CONTAINER: &str = "ldp:DirectContainer";
    pub const INDIRECT_CONTAINER: &str = "ldp:IndirectContainer";
    /// Parent of frozen snapshots inside the version storage
    pub const VERSION: &str = "nt:version";
}

macro_rules! predicates {
    ($($(#[$meta:meta])* $name:ident => $iri:expr;)*) => {
        $(
            $(#[$meta])*
            pub fn $name() -> RdfPredicate {
                RdfPredicate::from(NamedNode::from_static($iri))
            }
        )*
    };
}

macro_rules! classes {
    ($($(#[$meta:meta])* $name:ident => $iri:expr;)*) => {
        $(
            $(#[$meta])*
            pub fn $name() -> NamedNode {
                NamedNode::from_static($iri)
            }
        )*
    };
}

predicates! {
    rdf_type => "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    has_parent => "http://fedora.info/definitions/v4/repository#hasParent";
    has_version => "http://fedora.info/definitions/v4/repository#hasVersion";
    has_version_label => "http://fedora.info/definitions/v4/repository#hasVersionLabel";
    created => "http://fedora.info/definitions/v4/repository#created";
    created_by => "http://fedora.info/definitions/v4/repository#createdBy";
    last_modified => "http://fedora.info/definitions/v4/repository#lastModified";
    last_modified_by => "http://fedora.info/definitions/v4/repository#lastModifiedBy";
    writable => "http://fedora.info/definitions/v4/repository#writable";
    num_fixity_checks => "http://fedora.info/definitions/v4/repository#numFixityChecks";
    num_fixity_errors => "http://fedora.info/definitions/v4/repository#numFixityErrors";
    num_fixity_repaired => "http://fedora.info/definitions/v4/repository#numFixityRepaired";

    contains => "http://www.w3.org/ns/ldp#contains";
    member => "http://www.w3.org/ns/ldp#member";

    has_fixity => "http://www.loc.gov/premis/rdf/v1#hasFixity";
    has_event_outcome => "http://www.loc.gov/premis/rdf/v1#hasEventOutcome";
    has_message_digest => "http://www.loc.gov/premis/rdf/v1#hasMessageDigest";
    has_size => "http://www.loc.gov/premis/rdf/v1#hasSize";
    has_content_location => "http://www.loc.gov/premis/rdf/v1#hasContentLocation";
    has_content_location_value => "http://www.loc.gov/premis/rdf/v1#hasContentLocationValue";

    describes => "http://www.iana.org/assignments/relation/describes";
    described_by => "http://www.iana.org/assignments/relation/describedby";

    preferred_namespace_prefix => "http://purl.org/vocab/vann/preferredNamespacePrefix";
    preferred_namespace_uri => "http://purl.org/vocab/vann/preferredNamespaceUri";
}

classes! {
    fedora_container => "http://fedora.info/definitions/v4/repository#Container";
    fedora_binary => "http://fedora.info/definitions/v4/repository#Binary";
    fedora_description => "http://fedora.info/definitions/v4/repository#NonRdfSourceDescription";
    fedora_resource => "http://fedora.info/definitions/v4/repository#Resource";

    ldp_resource => "http://www.w3.org/ns/ldp#Resource";
    ldp_rdf_source => "http://www.w3.org/ns/ldp#RDFSource";
    ldp_non_rdf_source => "http://www.w3.org/ns/ldp#NonRDFSource";
    ldp_container => "http://www.w3.org/ns/ldp#Container";
    ldp_basic_container => "http://www.w3.org/ns/ldp#BasicContainer";
    ldp_direct_container => "http://www.w3.org/ns/ldp#DirectContainer";
    ldp_indirect_container => "http://www.w3.org/ns/ldp#IndirectContainer";
    /// Inserted-content-relation marker meaning "the member itself"
    ldp_member_subject => "http://www.w3.org/ns/ldp#MemberSubject";

    premis_fixity => "http://www.loc.gov/premis/rdf/v1#Fixity";
    premis_content_location => "http://www.loc.gov/premis/rdf/v1#ContentLocation";

    voaf_vocabulary => "http://purl.org/vocommons/voaf#Vocabulary";
}
