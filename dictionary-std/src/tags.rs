//! Data element tag declarations
//!
//! Adapted from DICOM PS3.6 (Data Dictionary).
// Automatically generated. Edit at your own risk.

use dicom_core::dictionary::{DataDictionaryEntryRef, TagRange, TagRange::*, VirtualVr::*};
use dicom_core::Tag;
use dicom_core::VR::*;

// -- command group (0000,xxxx) --

/// CommandGroupLength (0000,0000) UL 1 DICOM
#[rustfmt::skip]
pub const COMMAND_GROUP_LENGTH: Tag = Tag(0x0000, 0x0000);
/// AffectedSOPClassUID (0000,0002) UI 1 DICOM
#[rustfmt::skip]
pub const AFFECTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0002);
/// RequestedSOPClassUID (0000,0003) UI 1 DICOM
#[rustfmt::skip]
pub const REQUESTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0003);
/// CommandField (0000,0100) US 1 DICOM
#[rustfmt::skip]
pub const COMMAND_FIELD: Tag = Tag(0x0000, 0x0100);
/// MessageID (0000,0110) US 1 DICOM
#[rustfmt::skip]
pub const MESSAGE_ID: Tag = Tag(0x0000, 0x0110);
/// MessageIDBeingRespondedTo (0000,0120) US 1 DICOM
#[rustfmt::skip]
pub const MESSAGE_ID_BEING_RESPONDED_TO: Tag = Tag(0x0000, 0x0120);
/// MoveDestination (0000,0600) AE 1 DICOM
#[rustfmt::skip]
pub const MOVE_DESTINATION: Tag = Tag(0x0000, 0x0600);
/// Priority (0000,0700) US 1 DICOM
#[rustfmt::skip]
pub const PRIORITY: Tag = Tag(0x0000, 0x0700);
/// CommandDataSetType (0000,0800) US 1 DICOM
#[rustfmt::skip]
pub const COMMAND_DATA_SET_TYPE: Tag = Tag(0x0000, 0x0800);
/// Status (0000,0900) US 1 DICOM
#[rustfmt::skip]
pub const STATUS: Tag = Tag(0x0000, 0x0900);
/// OffendingElement (0000,0901) AT 1-n DICOM
#[rustfmt::skip]
pub const OFFENDING_ELEMENT: Tag = Tag(0x0000, 0x0901);
/// ErrorComment (0000,0902) LO 1 DICOM
#[rustfmt::skip]
pub const ERROR_COMMENT: Tag = Tag(0x0000, 0x0902);
/// ErrorID (0000,0903) US 1 DICOM
#[rustfmt::skip]
pub const ERROR_ID: Tag = Tag(0x0000, 0x0903);
/// AffectedSOPInstanceUID (0000,1000) UI 1 DICOM
#[rustfmt::skip]
pub const AFFECTED_SOP_INSTANCE_UID: Tag = Tag(0x0000, 0x1000);
/// RequestedSOPInstanceUID (0000,1001) UI 1 DICOM
#[rustfmt::skip]
pub const REQUESTED_SOP_INSTANCE_UID: Tag = Tag(0x0000, 0x1001);
/// EventTypeID (0000,1002) US 1 DICOM
#[rustfmt::skip]
pub const EVENT_TYPE_ID: Tag = Tag(0x0000, 0x1002);
/// AttributeIdentifierList (0000,1005) AT 1-n DICOM
#[rustfmt::skip]
pub const ATTRIBUTE_IDENTIFIER_LIST: Tag = Tag(0x0000, 0x1005);
/// ActionTypeID (0000,1008) US 1 DICOM
#[rustfmt::skip]
pub const ACTION_TYPE_ID: Tag = Tag(0x0000, 0x1008);
/// NumberOfRemainingSuboperations (0000,1020) US 1 DICOM
#[rustfmt::skip]
pub const NUMBER_OF_REMAINING_SUBOPERATIONS: Tag = Tag(0x0000, 0x1020);
/// NumberOfCompletedSuboperations (0000,1021) US 1 DICOM
#[rustfmt::skip]
pub const NUMBER_OF_COMPLETED_SUBOPERATIONS: Tag = Tag(0x0000, 0x1021);
/// NumberOfFailedSuboperations (0000,1022) US 1 DICOM
#[rustfmt::skip]
pub const NUMBER_OF_FAILED_SUBOPERATIONS: Tag = Tag(0x0000, 0x1022);
/// NumberOfWarningSuboperations (0000,1023) US 1 DICOM
#[rustfmt::skip]
pub const NUMBER_OF_WARNING_SUBOPERATIONS: Tag = Tag(0x0000, 0x1023);
/// MoveOriginatorApplicationEntityTitle (0000,1030) AE 1 DICOM
#[rustfmt::skip]
pub const MOVE_ORIGINATOR_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0000, 0x1030);
/// MoveOriginatorMessageID (0000,1031) US 1 DICOM
#[rustfmt::skip]
pub const MOVE_ORIGINATOR_MESSAGE_ID: Tag = Tag(0x0000, 0x1031);
/// FailedSOPSequence (0008,1198) SQ 1 DICOM
#[rustfmt::skip]
pub const FAILED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1198);

// -- file meta group (0002,xxxx) --

/// FileMetaInformationGroupLength (0002,0000) UL 1 DICOM
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// MediaStorageSOPClassUID (0002,0002) UI 1 DICOM
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI 1 DICOM
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI 1 DICOM
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI 1 DICOM
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH 1 DICOM
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE 1 DICOM
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SendingApplicationEntityTitle (0002,0017) AE 1 DICOM
#[rustfmt::skip]
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// ReceivingApplicationEntityTitle (0002,0018) AE 1 DICOM
#[rustfmt::skip]
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);

// -- identifying group (0008,xxxx) --

/// SOPClassUID (0008,0016) UI 1 DICOM
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI 1 DICOM
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020) DA 1 DICOM
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA 1 DICOM
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// ContentDate (0008,0023) DA 1 DICOM
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// StudyTime (0008,0030) TM 1 DICOM
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// AccessionNumber (0008,0050) SH 1 DICOM
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// QueryRetrieveLevel (0008,0052) CS 1 DICOM
#[rustfmt::skip]
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// InstanceAvailability (0008,0056) CS 1 DICOM
#[rustfmt::skip]
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// Modality (0008,0060) CS 1 DICOM
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ModalitiesInStudy (0008,0061) CS 1-n DICOM
#[rustfmt::skip]
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// InstitutionName (0008,0080) LO 1 DICOM
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// InstitutionAddress (0008,0081) LO 1 DICOM
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// ReferringPhysicianName (0008,0090) PN 1 DICOM
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// CodeValue (0008,0100) SH 1 DICOM
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102) SH 1 DICOM
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodeMeaning (0008,0104) LO 1 DICOM
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// StudyDescription (0008,1030) LO 1 DICOM
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// SeriesDescription (0008,103E) LO 1 DICOM
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// OperatorsName (0008,1070) PN 1-n DICOM
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// ReferencedSOPClassUID (0008,1150) UI 1 DICOM
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI 1 DICOM
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// RetrieveURL (0008,1190) UR 1 DICOM
#[rustfmt::skip]
pub const RETRIEVE_URL: Tag = Tag(0x0008, 0x1190);
/// ReferencedSOPSequence (0008,1199) SQ 1 DICOM
#[rustfmt::skip]
pub const REFERENCED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1199);
/// AnatomicRegionSequence (0008,2218) SQ 1 DICOM
#[rustfmt::skip]
pub const ANATOMIC_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2218);
/// AnatomicRegionModifierSequence (0008,2220) SQ 1 DICOM
#[rustfmt::skip]
pub const ANATOMIC_REGION_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2220);

// -- patient group (0010,xxxx) --

/// PatientName (0010,0010) PN 1 DICOM
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO 1 DICOM
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// IssuerOfPatientID (0010,0021) LO 1 DICOM
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// PatientBirthDate (0010,0030) DA 1 DICOM
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientSex (0010,0040) CS 1 DICOM
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// PatientAge (0010,1010) AS 1 DICOM
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientWeight (0010,1030) DS 1 DICOM
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// PatientAddress (0010,1040) LO 1 DICOM
#[rustfmt::skip]
pub const PATIENT_ADDRESS: Tag = Tag(0x0010, 0x1040);

// -- acquisition group (0018,xxxx) --

/// DataCollectionDiameter (0018,0090) DS 1 DICOM
#[rustfmt::skip]
pub const DATA_COLLECTION_DIAMETER: Tag = Tag(0x0018, 0x0090);
/// GantryDetectorTilt (0018,1120) DS 1 DICOM
#[rustfmt::skip]
pub const GANTRY_DETECTOR_TILT: Tag = Tag(0x0018, 0x1120);
/// TableHeight (0018,1130) DS 1 DICOM
#[rustfmt::skip]
pub const TABLE_HEIGHT: Tag = Tag(0x0018, 0x1130);
/// RotationDirection (0018,1140) CS 1 DICOM
#[rustfmt::skip]
pub const ROTATION_DIRECTION: Tag = Tag(0x0018, 0x1140);
/// CTAcquisitionTypeSequence (0018,9301) SQ 1 DICOM
#[rustfmt::skip]
pub const CT_ACQUISITION_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9301);
/// AcquisitionType (0018,9302) CS 1 DICOM
#[rustfmt::skip]
pub const ACQUISITION_TYPE: Tag = Tag(0x0018, 0x9302);
/// CTAcquisitionDetailsSequence (0018,9304) SQ 1 DICOM
#[rustfmt::skip]
pub const CT_ACQUISITION_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9304);
/// FluoroscopyFlag (0018,9305) CS 1 DICOM
#[rustfmt::skip]
pub const FLUOROSCOPY_FLAG: Tag = Tag(0x0018, 0x9305);
/// ConstantVolumeFlag (0018,9454) CS 1 DICOM
#[rustfmt::skip]
pub const CONSTANT_VOLUME_FLAG: Tag = Tag(0x0018, 0x9454);
/// SequenceOfUltrasoundRegions (0018,6011) SQ 1 DICOM
#[rustfmt::skip]
pub const SEQUENCE_OF_ULTRASOUND_REGIONS: Tag = Tag(0x0018, 0x6011);
/// RegionSpatialFormat (0018,6012) US 1 DICOM
#[rustfmt::skip]
pub const REGION_SPATIAL_FORMAT: Tag = Tag(0x0018, 0x6012);

// -- relationship group (0020,xxxx) --

/// StudyInstanceUID (0020,000D) UI 1 DICOM
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI 1 DICOM
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH 1 DICOM
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS 1 DICOM
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// InstanceNumber (0020,0013) IS 1 DICOM
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// TimezoneOffsetFromUTC (0020,0120) SH 1 DICOM
#[rustfmt::skip]
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0020, 0x0120);
/// NumberOfStudyRelatedSeries (0020,1206) IS 1 DICOM
#[rustfmt::skip]
pub const NUMBER_OF_STUDY_RELATED_SERIES: Tag = Tag(0x0020, 0x1206);
/// NumberOfStudyRelatedInstances (0020,1208) IS 1 DICOM
#[rustfmt::skip]
pub const NUMBER_OF_STUDY_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1208);
/// NumberOfSeriesRelatedInstances (0020,1209) IS 1 DICOM
#[rustfmt::skip]
pub const NUMBER_OF_SERIES_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1209);

// -- image pixel group (0028,xxxx) --

/// SamplesPerPixel (0028,0002) US 1 DICOM
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS 1 DICOM
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006) US 1 DICOM
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS 1 DICOM
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows (0028,0010) US 1 DICOM
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US 1 DICOM
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelAspectRatio (0028,0034) IS 2 DICOM
#[rustfmt::skip]
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// BitsAllocated (0028,0100) US 1 DICOM
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US 1 DICOM
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US 1 DICOM
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US 1 DICOM
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue (0028,0106) xs 1 DICOM
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) xs 1 DICOM
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// PixelPaddingRangeLimit (0028,0121) xs 1 DICOM
#[rustfmt::skip]
pub const PIXEL_PADDING_RANGE_LIMIT: Tag = Tag(0x0028, 0x0121);
/// BurnedInAnnotation (0028,0301) CS 1 DICOM
#[rustfmt::skip]
pub const BURNED_IN_ANNOTATION: Tag = Tag(0x0028, 0x0301);
/// ICCProfile (0028,2000) OB 1 DICOM
#[rustfmt::skip]
pub const ICC_PROFILE: Tag = Tag(0x0028, 0x2000);
/// ColorSpace (0028,2002) CS 1 DICOM
#[rustfmt::skip]
pub const COLOR_SPACE: Tag = Tag(0x0028, 0x2002);
/// PixelDataProviderURL (0028,7FE0) UT 1 DICOM
#[rustfmt::skip]
pub const PIXEL_DATA_PROVIDER_URL: Tag = Tag(0x0028, 0x7FE0);
/// RescaleIntercept (0028,1052) DS 1 DICOM
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS 1 DICOM
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// VOILUTFunction (0028,1056) CS 1 DICOM
#[rustfmt::skip]
pub const VOILUT_FUNCTION: Tag = Tag(0x0028, 0x1056);
/// RedPaletteColorLookupTableDescriptor (0028,1101) US 3 DICOM
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// GreenPaletteColorLookupTableDescriptor (0028,1102) US 3 DICOM
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1102);
/// BluePaletteColorLookupTableDescriptor (0028,1103) US 3 DICOM
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1103);
/// RedPaletteColorLookupTableData (0028,1201) OW 1 DICOM
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// GreenPaletteColorLookupTableData (0028,1202) OW 1 DICOM
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// BluePaletteColorLookupTableData (0028,1203) OW 1 DICOM
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// LossyImageCompression (0028,2110) CS 1 DICOM
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// LossyImageCompressionRatio (0028,2112) DS 1-n DICOM
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// LossyImageCompressionMethod (0028,2114) CS 1-n DICOM
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_METHOD: Tag = Tag(0x0028, 0x2114);

// -- procedure group (0032,0040,xxxx) --

/// RequestingPhysician (0032,1032) PN 1 DICOM
#[rustfmt::skip]
pub const REQUESTING_PHYSICIAN: Tag = Tag(0x0032, 0x1032);
/// RequestedProcedureDescription (0032,1060) LO 1 DICOM
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// RequestedProcedureCodeSequence (0032,1064) SQ 1 DICOM
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1064);
/// PerformedProcedureStepStartDate (0040,0244) DA 1 DICOM
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// PerformedProcedureStepStartTime (0040,0245) TM 1 DICOM
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// ScheduledStationAETitle (0040,0001) AE 1-n DICOM
#[rustfmt::skip]
pub const SCHEDULED_STATION_AE_TITLE: Tag = Tag(0x0040, 0x0001);
/// ScheduledProcedureStepStartDate (0040,0002) DA 1 DICOM
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0002);
/// ScheduledProcedureStepStartTime (0040,0003) TM 1 DICOM
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0003);
/// ScheduledPerformingPhysicianName (0040,0006) PN 1 DICOM
#[rustfmt::skip]
pub const SCHEDULED_PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0040, 0x0006);
/// ScheduledProcedureStepDescription (0040,0007) LO 1 DICOM
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0007);
/// ScheduledProcedureStepSequence (0040,0100) SQ 1 DICOM
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0100);
/// ScheduledStationName (0040,0010) SH 1 DICOM
#[rustfmt::skip]
pub const SCHEDULED_STATION_NAME: Tag = Tag(0x0040, 0x0010);
/// ScheduledProcedureStepLocation (0040,0011) SH 1 DICOM
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_LOCATION: Tag = Tag(0x0040, 0x0011);
/// RequestedProcedureID (0040,1001) SH 1 DICOM
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_ID: Tag = Tag(0x0040, 0x1001);
/// RequestAttributesSequence (0040,0275) SQ 1 DICOM
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// ConceptNameCodeSequence (0040,A043) SQ 1 DICOM
#[rustfmt::skip]
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// ConceptCodeSequence (0040,A168) SQ 1 DICOM
#[rustfmt::skip]
pub const CONCEPT_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA168);
/// ContentSequence (0040,A730) SQ 1 DICOM
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);

// -- media storage / directory group (0004,xxxx) --

/// DirectoryRecordSequence (0004,1220) SQ 1 DICOM
#[rustfmt::skip]
pub const DIRECTORY_RECORD_SEQUENCE: Tag = Tag(0x0004, 0x1220);
/// ReferencedFileID (0004,1500) CS 1-8 DICOM
#[rustfmt::skip]
pub const REFERENCED_FILE_ID: Tag = Tag(0x0004, 0x1500);

// -- multi-frame functional groups (5200,xxxx) --

/// SharedFunctionalGroupsSequence (5200,9229) SQ 1 DICOM
#[rustfmt::skip]
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);

// -- presentation state group (2050,xxxx) --

/// PresentationLUTShape (2050,0020) CS 1 DICOM
#[rustfmt::skip]
pub const PRESENTATION_LUT_SHAPE: Tag = Tag(0x2050, 0x0020);

// -- pixel data group (7FE0,xxxx) --

/// ExtendedOffsetTable (7FE0,0001) OV 1 DICOM
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE: Tag = Tag(0x7FE0, 0x0001);
/// ExtendedOffsetTableLengths (7FE0,0002) OV 1 DICOM
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE_LENGTHS: Tag = Tag(0x7FE0, 0x0002);
/// EncapsulatedPixelDataValueTotalLength (7FE0,0003) UV 1 DICOM
#[rustfmt::skip]
pub const ENCAPSULATED_PIXEL_DATA_VALUE_TOTAL_LENGTH: Tag = Tag(0x7FE0, 0x0003);
/// PixelData (7FE0,0010) ox 1 DICOM
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

// -- private creator convention --

/// PrivateInformationCreatorUID (gggg,0010) LO 1 DICOM
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0009, 0x0010);

type E = DataDictionaryEntryRef<'static>;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: Single(COMMAND_GROUP_LENGTH), alias: "CommandGroupLength", vr: Exact(UL) },
    E { tag: Single(AFFECTED_SOP_CLASS_UID), alias: "AffectedSOPClassUID", vr: Exact(UI) },
    E { tag: Single(REQUESTED_SOP_CLASS_UID), alias: "RequestedSOPClassUID", vr: Exact(UI) },
    E { tag: Single(COMMAND_FIELD), alias: "CommandField", vr: Exact(US) },
    E { tag: Single(MESSAGE_ID), alias: "MessageID", vr: Exact(US) },
    E { tag: Single(MESSAGE_ID_BEING_RESPONDED_TO), alias: "MessageIDBeingRespondedTo", vr: Exact(US) },
    E { tag: Single(MOVE_DESTINATION), alias: "MoveDestination", vr: Exact(AE) },
    E { tag: Single(PRIORITY), alias: "Priority", vr: Exact(US) },
    E { tag: Single(COMMAND_DATA_SET_TYPE), alias: "CommandDataSetType", vr: Exact(US) },
    E { tag: Single(STATUS), alias: "Status", vr: Exact(US) },
    E { tag: Single(OFFENDING_ELEMENT), alias: "OffendingElement", vr: Exact(AT) },
    E { tag: Single(ERROR_COMMENT), alias: "ErrorComment", vr: Exact(LO) },
    E { tag: Single(ERROR_ID), alias: "ErrorID", vr: Exact(US) },
    E { tag: Single(AFFECTED_SOP_INSTANCE_UID), alias: "AffectedSOPInstanceUID", vr: Exact(UI) },
    E { tag: Single(REQUESTED_SOP_INSTANCE_UID), alias: "RequestedSOPInstanceUID", vr: Exact(UI) },
    E { tag: Single(EVENT_TYPE_ID), alias: "EventTypeID", vr: Exact(US) },
    E { tag: Single(ATTRIBUTE_IDENTIFIER_LIST), alias: "AttributeIdentifierList", vr: Exact(AT) },
    E { tag: Single(ACTION_TYPE_ID), alias: "ActionTypeID", vr: Exact(US) },
    E { tag: Single(NUMBER_OF_REMAINING_SUBOPERATIONS), alias: "NumberOfRemainingSuboperations", vr: Exact(US) },
    E { tag: Single(NUMBER_OF_COMPLETED_SUBOPERATIONS), alias: "NumberOfCompletedSuboperations", vr: Exact(US) },
    E { tag: Single(NUMBER_OF_FAILED_SUBOPERATIONS), alias: "NumberOfFailedSuboperations", vr: Exact(US) },
    E { tag: Single(NUMBER_OF_WARNING_SUBOPERATIONS), alias: "NumberOfWarningSuboperations", vr: Exact(US) },
    E { tag: Single(MOVE_ORIGINATOR_APPLICATION_ENTITY_TITLE), alias: "MoveOriginatorApplicationEntityTitle", vr: Exact(AE) },
    E { tag: Single(MOVE_ORIGINATOR_MESSAGE_ID), alias: "MoveOriginatorMessageID", vr: Exact(US) },
    E { tag: Single(FAILED_SOP_SEQUENCE), alias: "FailedSOPSequence", vr: Exact(SQ) },

    E { tag: Single(FILE_META_INFORMATION_GROUP_LENGTH), alias: "FileMetaInformationGroupLength", vr: Exact(UL) },
    E { tag: Single(MEDIA_STORAGE_SOP_CLASS_UID), alias: "MediaStorageSOPClassUID", vr: Exact(UI) },
    E { tag: Single(MEDIA_STORAGE_SOP_INSTANCE_UID), alias: "MediaStorageSOPInstanceUID", vr: Exact(UI) },
    E { tag: Single(TRANSFER_SYNTAX_UID), alias: "TransferSyntaxUID", vr: Exact(UI) },
    E { tag: Single(IMPLEMENTATION_CLASS_UID), alias: "ImplementationClassUID", vr: Exact(UI) },
    E { tag: Single(IMPLEMENTATION_VERSION_NAME), alias: "ImplementationVersionName", vr: Exact(SH) },
    E { tag: Single(SOURCE_APPLICATION_ENTITY_TITLE), alias: "SourceApplicationEntityTitle", vr: Exact(AE) },
    E { tag: Single(SENDING_APPLICATION_ENTITY_TITLE), alias: "SendingApplicationEntityTitle", vr: Exact(AE) },
    E { tag: Single(RECEIVING_APPLICATION_ENTITY_TITLE), alias: "ReceivingApplicationEntityTitle", vr: Exact(AE) },

    E { tag: Single(SOP_CLASS_UID), alias: "SOPClassUID", vr: Exact(UI) },
    E { tag: Single(SOP_INSTANCE_UID), alias: "SOPInstanceUID", vr: Exact(UI) },
    E { tag: Single(STUDY_DATE), alias: "StudyDate", vr: Exact(DA) },
    E { tag: Single(SERIES_DATE), alias: "SeriesDate", vr: Exact(DA) },
    E { tag: Single(CONTENT_DATE), alias: "ContentDate", vr: Exact(DA) },
    E { tag: Single(STUDY_TIME), alias: "StudyTime", vr: Exact(TM) },
    E { tag: Single(ACCESSION_NUMBER), alias: "AccessionNumber", vr: Exact(SH) },
    E { tag: Single(QUERY_RETRIEVE_LEVEL), alias: "QueryRetrieveLevel", vr: Exact(CS) },
    E { tag: Single(INSTANCE_AVAILABILITY), alias: "InstanceAvailability", vr: Exact(CS) },
    E { tag: Single(MODALITY), alias: "Modality", vr: Exact(CS) },
    E { tag: Single(MODALITIES_IN_STUDY), alias: "ModalitiesInStudy", vr: Exact(CS) },
    E { tag: Single(INSTITUTION_NAME), alias: "InstitutionName", vr: Exact(LO) },
    E { tag: Single(INSTITUTION_ADDRESS), alias: "InstitutionAddress", vr: Exact(LO) },
    E { tag: Single(REFERRING_PHYSICIAN_NAME), alias: "ReferringPhysicianName", vr: Exact(PN) },
    E { tag: Single(CODE_VALUE), alias: "CodeValue", vr: Exact(SH) },
    E { tag: Single(CODING_SCHEME_DESIGNATOR), alias: "CodingSchemeDesignator", vr: Exact(SH) },
    E { tag: Single(CODE_MEANING), alias: "CodeMeaning", vr: Exact(LO) },
    E { tag: Single(STUDY_DESCRIPTION), alias: "StudyDescription", vr: Exact(LO) },
    E { tag: Single(SERIES_DESCRIPTION), alias: "SeriesDescription", vr: Exact(LO) },
    E { tag: Single(OPERATORS_NAME), alias: "OperatorsName", vr: Exact(PN) },
    E { tag: Single(REFERENCED_SOP_CLASS_UID), alias: "ReferencedSOPClassUID", vr: Exact(UI) },
    E { tag: Single(REFERENCED_SOP_INSTANCE_UID), alias: "ReferencedSOPInstanceUID", vr: Exact(UI) },
    E { tag: Single(RETRIEVE_URL), alias: "RetrieveURL", vr: Exact(UR) },
    E { tag: Single(REFERENCED_SOP_SEQUENCE), alias: "ReferencedSOPSequence", vr: Exact(SQ) },
    E { tag: Single(ANATOMIC_REGION_SEQUENCE), alias: "AnatomicRegionSequence", vr: Exact(SQ) },
    E { tag: Single(ANATOMIC_REGION_MODIFIER_SEQUENCE), alias: "AnatomicRegionModifierSequence", vr: Exact(SQ) },

    E { tag: Single(PATIENT_NAME), alias: "PatientName", vr: Exact(PN) },
    E { tag: Single(PATIENT_ID), alias: "PatientID", vr: Exact(LO) },
    E { tag: Single(ISSUER_OF_PATIENT_ID), alias: "IssuerOfPatientID", vr: Exact(LO) },
    E { tag: Single(PATIENT_BIRTH_DATE), alias: "PatientBirthDate", vr: Exact(DA) },
    E { tag: Single(PATIENT_SEX), alias: "PatientSex", vr: Exact(CS) },
    E { tag: Single(PATIENT_AGE), alias: "PatientAge", vr: Exact(AS) },
    E { tag: Single(PATIENT_WEIGHT), alias: "PatientWeight", vr: Exact(DS) },
    E { tag: Single(PATIENT_ADDRESS), alias: "PatientAddress", vr: Exact(LO) },

    E { tag: Single(DATA_COLLECTION_DIAMETER), alias: "DataCollectionDiameter", vr: Exact(DS) },
    E { tag: Single(GANTRY_DETECTOR_TILT), alias: "GantryDetectorTilt", vr: Exact(DS) },
    E { tag: Single(TABLE_HEIGHT), alias: "TableHeight", vr: Exact(DS) },
    E { tag: Single(ROTATION_DIRECTION), alias: "RotationDirection", vr: Exact(CS) },
    E { tag: Single(CT_ACQUISITION_TYPE_SEQUENCE), alias: "CTAcquisitionTypeSequence", vr: Exact(SQ) },
    E { tag: Single(ACQUISITION_TYPE), alias: "AcquisitionType", vr: Exact(CS) },
    E { tag: Single(CT_ACQUISITION_DETAILS_SEQUENCE), alias: "CTAcquisitionDetailsSequence", vr: Exact(SQ) },
    E { tag: Single(FLUOROSCOPY_FLAG), alias: "FluoroscopyFlag", vr: Exact(CS) },
    E { tag: Single(CONSTANT_VOLUME_FLAG), alias: "ConstantVolumeFlag", vr: Exact(CS) },
    E { tag: Single(SEQUENCE_OF_ULTRASOUND_REGIONS), alias: "SequenceOfUltrasoundRegions", vr: Exact(SQ) },
    E { tag: Single(REGION_SPATIAL_FORMAT), alias: "RegionSpatialFormat", vr: Exact(US) },

    E { tag: Single(STUDY_INSTANCE_UID), alias: "StudyInstanceUID", vr: Exact(UI) },
    E { tag: Single(SERIES_INSTANCE_UID), alias: "SeriesInstanceUID", vr: Exact(UI) },
    E { tag: Single(STUDY_ID), alias: "StudyID", vr: Exact(SH) },
    E { tag: Single(SERIES_NUMBER), alias: "SeriesNumber", vr: Exact(IS) },
    E { tag: Single(INSTANCE_NUMBER), alias: "InstanceNumber", vr: Exact(IS) },
    E { tag: Single(TIMEZONE_OFFSET_FROM_UTC), alias: "TimezoneOffsetFromUTC", vr: Exact(SH) },
    E { tag: Single(NUMBER_OF_STUDY_RELATED_SERIES), alias: "NumberOfStudyRelatedSeries", vr: Exact(IS) },
    E { tag: Single(NUMBER_OF_STUDY_RELATED_INSTANCES), alias: "NumberOfStudyRelatedInstances", vr: Exact(IS) },
    E { tag: Single(NUMBER_OF_SERIES_RELATED_INSTANCES), alias: "NumberOfSeriesRelatedInstances", vr: Exact(IS) },

    E { tag: Single(SAMPLES_PER_PIXEL), alias: "SamplesPerPixel", vr: Exact(US) },
    E { tag: Single(PHOTOMETRIC_INTERPRETATION), alias: "PhotometricInterpretation", vr: Exact(CS) },
    E { tag: Single(PLANAR_CONFIGURATION), alias: "PlanarConfiguration", vr: Exact(US) },
    E { tag: Single(NUMBER_OF_FRAMES), alias: "NumberOfFrames", vr: Exact(IS) },
    E { tag: Single(ROWS), alias: "Rows", vr: Exact(US) },
    E { tag: Single(COLUMNS), alias: "Columns", vr: Exact(US) },
    E { tag: Single(PIXEL_ASPECT_RATIO), alias: "PixelAspectRatio", vr: Exact(IS) },
    E { tag: Single(BITS_ALLOCATED), alias: "BitsAllocated", vr: Exact(US) },
    E { tag: Single(BITS_STORED), alias: "BitsStored", vr: Exact(US) },
    E { tag: Single(HIGH_BIT), alias: "HighBit", vr: Exact(US) },
    E { tag: Single(PIXEL_REPRESENTATION), alias: "PixelRepresentation", vr: Exact(US) },
    E { tag: Single(SMALLEST_IMAGE_PIXEL_VALUE), alias: "SmallestImagePixelValue", vr: Xs },
    E { tag: Single(LARGEST_IMAGE_PIXEL_VALUE), alias: "LargestImagePixelValue", vr: Xs },
    E { tag: Single(PIXEL_PADDING_RANGE_LIMIT), alias: "PixelPaddingRangeLimit", vr: Xs },
    E { tag: Single(BURNED_IN_ANNOTATION), alias: "BurnedInAnnotation", vr: Exact(CS) },
    E { tag: Single(ICC_PROFILE), alias: "ICCProfile", vr: Exact(OB) },
    E { tag: Single(COLOR_SPACE), alias: "ColorSpace", vr: Exact(CS) },
    E { tag: Single(PIXEL_DATA_PROVIDER_URL), alias: "PixelDataProviderURL", vr: Exact(UT) },
    E { tag: Single(RESCALE_INTERCEPT), alias: "RescaleIntercept", vr: Exact(DS) },
    E { tag: Single(RESCALE_SLOPE), alias: "RescaleSlope", vr: Exact(DS) },
    E { tag: Single(VOILUT_FUNCTION), alias: "VOILUTFunction", vr: Exact(CS) },
    E { tag: Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "RedPaletteColorLookupTableDescriptor", vr: Exact(US) },
    E { tag: Single(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "GreenPaletteColorLookupTableDescriptor", vr: Exact(US) },
    E { tag: Single(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "BluePaletteColorLookupTableDescriptor", vr: Exact(US) },
    E { tag: Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "RedPaletteColorLookupTableData", vr: Exact(OW) },
    E { tag: Single(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "GreenPaletteColorLookupTableData", vr: Exact(OW) },
    E { tag: Single(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "BluePaletteColorLookupTableData", vr: Exact(OW) },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION), alias: "LossyImageCompression", vr: Exact(CS) },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION_RATIO), alias: "LossyImageCompressionRatio", vr: Exact(DS) },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION_METHOD), alias: "LossyImageCompressionMethod", vr: Exact(CS) },

    E { tag: Single(REQUESTING_PHYSICIAN), alias: "RequestingPhysician", vr: Exact(PN) },
    E { tag: Single(REQUESTED_PROCEDURE_DESCRIPTION), alias: "RequestedProcedureDescription", vr: Exact(LO) },
    E { tag: Single(REQUESTED_PROCEDURE_CODE_SEQUENCE), alias: "RequestedProcedureCodeSequence", vr: Exact(SQ) },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_DATE), alias: "PerformedProcedureStepStartDate", vr: Exact(DA) },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_TIME), alias: "PerformedProcedureStepStartTime", vr: Exact(TM) },
    E { tag: Single(SCHEDULED_STATION_AE_TITLE), alias: "ScheduledStationAETitle", vr: Exact(AE) },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_START_DATE), alias: "ScheduledProcedureStepStartDate", vr: Exact(DA) },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_START_TIME), alias: "ScheduledProcedureStepStartTime", vr: Exact(TM) },
    E { tag: Single(SCHEDULED_PERFORMING_PHYSICIAN_NAME), alias: "ScheduledPerformingPhysicianName", vr: Exact(PN) },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_DESCRIPTION), alias: "ScheduledProcedureStepDescription", vr: Exact(LO) },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_SEQUENCE), alias: "ScheduledProcedureStepSequence", vr: Exact(SQ) },
    E { tag: Single(SCHEDULED_STATION_NAME), alias: "ScheduledStationName", vr: Exact(SH) },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_LOCATION), alias: "ScheduledProcedureStepLocation", vr: Exact(SH) },
    E { tag: Single(REQUESTED_PROCEDURE_ID), alias: "RequestedProcedureID", vr: Exact(SH) },
    E { tag: Single(REQUEST_ATTRIBUTES_SEQUENCE), alias: "RequestAttributesSequence", vr: Exact(SQ) },
    E { tag: Single(CONCEPT_NAME_CODE_SEQUENCE), alias: "ConceptNameCodeSequence", vr: Exact(SQ) },
    E { tag: Single(CONCEPT_CODE_SEQUENCE), alias: "ConceptCodeSequence", vr: Exact(SQ) },
    E { tag: Single(CONTENT_SEQUENCE), alias: "ContentSequence", vr: Exact(SQ) },

    E { tag: Single(DIRECTORY_RECORD_SEQUENCE), alias: "DirectoryRecordSequence", vr: Exact(SQ) },
    E { tag: Single(REFERENCED_FILE_ID), alias: "ReferencedFileID", vr: Exact(CS) },

    E { tag: Single(SHARED_FUNCTIONAL_GROUPS_SEQUENCE), alias: "SharedFunctionalGroupsSequence", vr: Exact(SQ) },

    E { tag: Single(PRESENTATION_LUT_SHAPE), alias: "PresentationLUTShape", vr: Exact(CS) },

    E { tag: Single(EXTENDED_OFFSET_TABLE), alias: "ExtendedOffsetTable", vr: Exact(OV) },
    E { tag: Single(EXTENDED_OFFSET_TABLE_LENGTHS), alias: "ExtendedOffsetTableLengths", vr: Exact(OV) },
    E { tag: Single(ENCAPSULATED_PIXEL_DATA_VALUE_TOTAL_LENGTH), alias: "EncapsulatedPixelDataValueTotalLength", vr: Exact(UV) },
    E { tag: Single(PIXEL_DATA), alias: "PixelData", vr: Px },

    E { tag: Single(PRIVATE_INFORMATION_CREATOR_UID), alias: "PrivateInformationCreatorUID", vr: Exact(LO) },
];
