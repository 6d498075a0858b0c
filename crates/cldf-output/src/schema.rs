//! Declared schemas of the output tables.

use std::fmt;

const TERMS: &str = "http://cldf.clld.org/v1.0/terms.rdf";

pub const LANGUAGES: &str = "languages.csv";
pub const PARAMETERS: &str = "parameters.csv";
pub const CODES: &str = "codes.csv";
pub const VALUES: &str = "values.csv";
pub const CONSTRUCTIONS: &str = "constructions.csv";
pub const CVALUES: &str = "cvalues.csv";

/// CLDF ontology terms used as column property URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Id,
    Name,
    Description,
    Glottocode,
    Iso639P3code,
    Macroarea,
    Latitude,
    Longitude,
    LanguageReference,
    ParameterReference,
    CodeReference,
    Value,
    Comment,
    Source,
}

impl Property {
    pub fn term(self) -> &'static str {
        match self {
            Property::Id => "id",
            Property::Name => "name",
            Property::Description => "description",
            Property::Glottocode => "glottocode",
            Property::Iso639P3code => "iso639P3code",
            Property::Macroarea => "macroarea",
            Property::Latitude => "latitude",
            Property::Longitude => "longitude",
            Property::LanguageReference => "languageReference",
            Property::ParameterReference => "parameterReference",
            Property::CodeReference => "codeReference",
            Property::Value => "value",
            Property::Comment => "comment",
            Property::Source => "source",
        }
    }

    pub fn url(self) -> String {
        format!("{TERMS}#{}", self.term())
    }

    /// Table a reference property points into.
    pub fn referenced_table(self) -> Option<&'static str> {
        match self {
            Property::LanguageReference => Some(LANGUAGES),
            Property::ParameterReference => Some(PARAMETERS),
            Property::CodeReference => Some(CODES),
            _ => None,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.term())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Datatype {
    String,
    Decimal { minimum: f64, maximum: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub property: Option<Property>,
    pub separator: Option<&'static str>,
    pub datatype: Datatype,
}

impl ColumnSpec {
    fn plain(name: &'static str) -> Self {
        Self {
            name,
            property: None,
            separator: None,
            datatype: Datatype::String,
        }
    }

    fn term(name: &'static str, property: Property) -> Self {
        Self {
            property: Some(property),
            ..Self::plain(name)
        }
    }

    fn separated(mut self, separator: &'static str) -> Self {
        self.separator = Some(separator);
        self
    }

    fn decimal(mut self, minimum: f64, maximum: f64) -> Self {
        self.datatype = Datatype::Decimal { minimum, maximum };
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub column: &'static str,
    pub reference_table: &'static str,
    pub reference_column: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    /// File name, also the table's identity in the descriptor.
    pub url: &'static str,
    /// CLDF component this table implements, if any.
    pub component: Option<&'static str>,
    pub columns: Vec<ColumnSpec>,
    pub foreign_keys: Vec<ForeignKey>,
}

impl TableSchema {
    fn new(url: &'static str, component: Option<&'static str>, columns: Vec<ColumnSpec>) -> Self {
        let foreign_keys = columns
            .iter()
            .filter_map(|column| {
                let table = column.property?.referenced_table()?;
                Some(ForeignKey {
                    column: column.name,
                    reference_table: table,
                    reference_column: "ID",
                })
            })
            .collect();
        Self {
            url,
            component,
            columns,
            foreign_keys,
        }
    }

    fn with_foreign_key(
        mut self,
        column: &'static str,
        reference_table: &'static str,
        reference_column: &'static str,
    ) -> Self {
        self.foreign_keys.push(ForeignKey {
            column,
            reference_table,
            reference_column,
        });
        self
    }

    /// The column carrying the row identifier.
    pub fn id_column(&self) -> Option<&ColumnSpec> {
        self.columns
            .iter()
            .find(|column| column.property == Some(Property::Id))
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn conforms_to(&self) -> Option<String> {
        self.component.map(|component| format!("{TERMS}#{component}"))
    }
}

/// Every output table, in descriptor order.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSchema {
    pub tables: Vec<TableSchema>,
}

impl DatasetSchema {
    pub fn table(&self, url: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|table| table.url == url)
    }

    pub fn conforms_to(&self) -> String {
        format!("{TERMS}#StructureDataset")
    }
}

/// Schemas of the relative-pronoun dataset.
pub fn dataset_schema() -> DatasetSchema {
    let values = TableSchema::new(
        VALUES,
        Some("ValueTable"),
        vec![
            ColumnSpec::term("ID", Property::Id),
            ColumnSpec::term("Language_ID", Property::LanguageReference),
            ColumnSpec::term("Parameter_ID", Property::ParameterReference),
            ColumnSpec::term("Value", Property::Value),
            ColumnSpec::term("Code_ID", Property::CodeReference),
            ColumnSpec::term("Comment", Property::Comment),
            ColumnSpec::term("Source", Property::Source).separated(";"),
        ],
    );
    let languages = TableSchema::new(
        LANGUAGES,
        Some("LanguageTable"),
        vec![
            ColumnSpec::term("ID", Property::Id),
            ColumnSpec::term("Name", Property::Name),
            ColumnSpec::term("Macroarea", Property::Macroarea),
            ColumnSpec::term("Latitude", Property::Latitude).decimal(-90.0, 90.0),
            ColumnSpec::term("Longitude", Property::Longitude).decimal(-180.0, 180.0),
            ColumnSpec::term("Glottocode", Property::Glottocode),
            ColumnSpec::term("ISO639P3code", Property::Iso639P3code),
            ColumnSpec::plain("Family"),
            ColumnSpec::plain("Subbranch"),
            ColumnSpec::plain("Subsubbranch"),
            ColumnSpec::plain("EarlyTimeBP"),
            ColumnSpec::plain("LateTimeBP"),
            ColumnSpec::plain("AvTimeBP"),
            ColumnSpec::term("Source", Property::Source).separated(";"),
        ],
    );
    let parameters = TableSchema::new(
        PARAMETERS,
        Some("ParameterTable"),
        vec![
            ColumnSpec::term("ID", Property::Id),
            ColumnSpec::term("Name", Property::Name),
            ColumnSpec::term("Description", Property::Description),
            ColumnSpec::plain("Grammacodes").separated(";"),
        ],
    );
    let codes = TableSchema::new(
        CODES,
        Some("CodeTable"),
        vec![
            ColumnSpec::term("ID", Property::Id),
            ColumnSpec::term("Parameter_ID", Property::ParameterReference),
            ColumnSpec::term("Name", Property::Name),
            ColumnSpec::term("Description", Property::Description),
        ],
    );
    let constructions = TableSchema::new(
        CONSTRUCTIONS,
        None,
        vec![
            ColumnSpec::term("ID", Property::Id),
            ColumnSpec::term("Language_ID", Property::LanguageReference),
            ColumnSpec::term("Name", Property::Name),
            ColumnSpec::term("Description", Property::Description),
        ],
    );
    let cvalues = TableSchema::new(
        CVALUES,
        None,
        vec![
            ColumnSpec::term("ID", Property::Id),
            ColumnSpec::plain("Construction_ID"),
            ColumnSpec::term("Parameter_ID", Property::ParameterReference),
            ColumnSpec::term("Code_ID", Property::CodeReference),
            ColumnSpec::term("Value", Property::Value),
            ColumnSpec::term("Comment", Property::Comment),
        ],
    )
    .with_foreign_key("Construction_ID", CONSTRUCTIONS, "ID");

    DatasetSchema {
        tables: vec![values, languages, parameters, codes, constructions, cvalues],
    }
}
