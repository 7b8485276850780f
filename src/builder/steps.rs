//! Classic flow step selection

use log::debug;

use crate::error::{Error, Result};
use crate::models::{DocumentType, FaceCaptureType, FlowSteps};
use crate::sdk::{
    ClassicFlowBuilder, DocumentStep, DocumentStepType, FaceStepVariant, SelectableDocumentType,
};

/// Add the configured steps to `builder`. Missing flags add nothing.
pub fn configure_classic_steps<C>(builder: &mut C, steps: Option<&FlowSteps>) -> Result<()>
where
    C: ClassicFlowBuilder,
{
    let Some(steps) = steps else {
        return Ok(());
    };

    if steps.welcome == Some(true) {
        builder.with_welcome_step();
    }

    if steps.proof_of_address == Some(true) {
        builder.with_proof_of_address_step();
    }

    if let Some(step) = document_step(steps)? {
        debug!("Adding document step: {:?}", step);
        builder.with_document_step(step);
    }

    if let Some(variant) = face_step(steps) {
        debug!("Adding face step: {:?}", variant);
        builder.with_face_step(variant);
    }

    Ok(())
}

/// Resolve the document step, if any.
///
/// An exact type with a country wins over a selectable list. An empty list,
/// or a document section without either, gives an unconstrained step.
pub fn document_step(steps: &FlowSteps) -> Result<Option<DocumentStep>> {
    let Some(options) = steps.capture_document.as_ref() else {
        return Ok(None);
    };

    if let (Some(doc_type), Some(country)) = (options.doc_type, options.country_code.as_deref()) {
        return Ok(Some(DocumentStep::Typed {
            document: typed_document(doc_type, country),
        }));
    }

    if let Some(allowed) = options.allowed_document_types.as_ref() {
        if allowed.is_empty() {
            return Ok(Some(DocumentStep::Unconstrained));
        }

        let types = allowed
            .iter()
            .map(|doc_type| selectable_document_type(*doc_type))
            .collect::<Result<Vec<_>>>()?;
        return Ok(Some(DocumentStep::Selectable { types }));
    }

    Ok(Some(DocumentStep::Unconstrained))
}

fn typed_document(doc_type: DocumentType, country: &str) -> DocumentStepType {
    let country = country.to_string();
    match doc_type {
        DocumentType::Passport => DocumentStepType::Passport,
        DocumentType::DrivingLicence => DocumentStepType::DrivingLicence { country },
        DocumentType::NationalIdentityCard => DocumentStepType::NationalIdentityCard { country },
        DocumentType::ResidencePermit => DocumentStepType::ResidencePermit { country },
        DocumentType::Visa => DocumentStepType::Visa { country },
        DocumentType::WorkPermit => DocumentStepType::WorkPermit { country },
        DocumentType::Generic => DocumentStepType::Generic { country },
    }
}

fn selectable_document_type(doc_type: DocumentType) -> Result<SelectableDocumentType> {
    match doc_type {
        DocumentType::Passport => Ok(SelectableDocumentType::Passport),
        DocumentType::DrivingLicence => Ok(SelectableDocumentType::DrivingLicence),
        DocumentType::NationalIdentityCard => Ok(SelectableDocumentType::IdentityCard),
        DocumentType::ResidencePermit => Ok(SelectableDocumentType::ResidencePermit),
        DocumentType::Visa | DocumentType::WorkPermit | DocumentType::Generic => {
            Err(Error::UnsupportedDocumentType(doc_type))
        }
    }
}

/// Resolve the face step from its variant tag, applying defaults
pub fn face_step(steps: &FlowSteps) -> Option<FaceStepVariant> {
    let face = steps.capture_face.as_ref()?;
    let capture_type = face.capture_type?;

    let show_intro = face.show_intro.unwrap_or(true);
    let manual_video_capture = face.manual_video_capture.unwrap_or(false);
    let record_audio = face.record_audio.unwrap_or(false);

    let variant = match capture_type {
        FaceCaptureType::Photo => FaceStepVariant::Photo {
            show_selfie_intro_screen: show_intro,
        },
        FaceCaptureType::Video => FaceStepVariant::Video {
            show_intro_video: show_intro,
            manual_liveness_capture: manual_video_capture,
        },
        FaceCaptureType::Motion => FaceStepVariant::Motion { record_audio },
    };
    Some(variant)
}
