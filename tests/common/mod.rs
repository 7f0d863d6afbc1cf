#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const SECT_PR: &str = concat!(
    r#"<w:sectPr w:rsidR="00A1"><w:headerReference w:type="default" r:id="rId7"/>"#,
    r#"<w:pgSz w:w="11906" w:h="16838"/>"#,
    r#"<w:pgMar w:top="1701" w:right="1134" w:bottom="1418" w:left="1134" w:header="709" w:footer="709" w:gutter="0"/>"#,
    r#"<w:cols w:space="708"/></w:sectPr>"#
);

pub const HEADER_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:hdr xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:p><w:r><w:t>B2B Network</w:t></w:r></w:p></w:hdr>"#
);

const CONTENT_TYPES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"<Override PartName="/word/header1.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml"/>"#,
    "</Types>"
);

const ROOT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    "</Relationships>"
);

pub fn document_xml(body: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            "<w:body>{}</w:body></w:document>"
        ),
        body
    )
}

/// A template with placeholder content, a header part and page geometry.
pub fn write_template(path: &Path) {
    let body = format!(
        concat!(
            r#"<w:p><w:r><w:t>Template placeholder</w:t></w:r></w:p>"#,
            r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t>Old table</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#,
            "{}"
        ),
        SECT_PR
    );
    write_package(path, &document_xml(&body));
}

pub fn write_package(path: &Path, document: &str) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("word/document.xml", document),
        ("word/header1.xml", HEADER_XML),
    ];
    for (name, content) in parts {
        zip.start_file(name, SimpleFileOptions::default()).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

pub fn minimal_record() -> &'static str {
    r#"{
        "name": "Jan Kowalski",
        "first_name": "Jan",
        "position": "Developer",
        "language": "pl",
        "why_points": ["Dobry zespół"],
        "education": [
            {"dates": "2015-2019", "institution": "AGH", "degree": "MSc", "location": "Kraków"}
        ],
        "skills": [],
        "certifications": [],
        "languages": [],
        "experience": []
    }"#
}

pub fn full_record(blind: bool, language: &str) -> String {
    format!(
        r#"{{
        "name": "Anna Nowak",
        "first_name": "Anna",
        "position": "Senior DevOps Engineer",
        "language": "{}",
        "blind_cv": {},
        "why_points": ["8 lat doświadczenia.", "Kubernetes;"],
        "education": [
            {{"dates": "2008-2013", "institution": "PW", "degree": "MSc Informatyka", "location": "Warszawa"}},
            {{"dates": "2005-2008", "institution": "UW", "degree": "BSc", "location": "Warszawa"}},
            {{"dates": "2004", "institution": "LO", "degree": "Matura", "location": "Łódź"}}
        ],
        "skills": [{{"label": "Chmura:", "content": "AWS, GCP"}}],
        "certifications": ["CKA – CNCF (2021)"],
        "languages": ["Polski – ojczysty", "Angielski – biegły"],
        "experience": [
            {{
                "dates": "03.2020 – currently",
                "company": "Megabank S.A.",
                "industry": "Bankowość",
                "position": "DevOps Engineer",
                "responsibilities": ["Utrzymanie klastrów", "Monitoring."],
                "technologies": ["Kubernetes", "Terraform"]
            }},
            {{
                "dates": "01.2015 – 02.2020",
                "company": "Shopster",
                "position": "SysAdmin",
                "responsibilities": ["Automatyzacja"]
            }}
        ]
    }}"#,
        language, blind
    )
}
