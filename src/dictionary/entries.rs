//! Automatically generated dictionary data.
//! Derived from the data element registry of DICOM PS3.6,
//! pruned to the attributes relevant to this crate. Edit at your own risk.

use super::{DictionaryEntry, TagRange::*};
use crate::header::{Tag, VR};

/// The curated table of standard attribute dictionary entries.
#[rustfmt::skip]
pub const ENTRIES: &[DictionaryEntry] = &[
    DictionaryEntry { tag: Single(Tag(0x0002, 0x0000)), keyword: "FileMetaInformationGroupLength", vr: VR::UL },
    DictionaryEntry { tag: Single(Tag(0x0002, 0x0001)), keyword: "FileMetaInformationVersion", vr: VR::OB },
    DictionaryEntry { tag: Single(Tag(0x0002, 0x0002)), keyword: "MediaStorageSOPClassUID", vr: VR::UI },
    DictionaryEntry { tag: Single(Tag(0x0002, 0x0003)), keyword: "MediaStorageSOPInstanceUID", vr: VR::UI },
    DictionaryEntry { tag: Single(Tag(0x0002, 0x0010)), keyword: "TransferSyntaxUID", vr: VR::UI },
    DictionaryEntry { tag: Single(Tag(0x0002, 0x0012)), keyword: "ImplementationClassUID", vr: VR::UI },
    DictionaryEntry { tag: Single(Tag(0x0002, 0x0013)), keyword: "ImplementationVersionName", vr: VR::SH },
    DictionaryEntry { tag: Single(Tag(0x0002, 0x0016)), keyword: "SourceApplicationEntityTitle", vr: VR::AE },
    DictionaryEntry { tag: Single(Tag(0x0002, 0x0100)), keyword: "PrivateInformationCreatorUID", vr: VR::UI },
    DictionaryEntry { tag: Single(Tag(0x0002, 0x0102)), keyword: "PrivateInformation", vr: VR::OB },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0005)), keyword: "SpecificCharacterSet", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0008)), keyword: "ImageType", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0012)), keyword: "InstanceCreationDate", vr: VR::DA },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0013)), keyword: "InstanceCreationTime", vr: VR::TM },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0014)), keyword: "InstanceCreatorUID", vr: VR::UI },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0016)), keyword: "SOPClassUID", vr: VR::UI },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0018)), keyword: "SOPInstanceUID", vr: VR::UI },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0020)), keyword: "StudyDate", vr: VR::DA },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0021)), keyword: "SeriesDate", vr: VR::DA },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0022)), keyword: "AcquisitionDate", vr: VR::DA },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0023)), keyword: "ContentDate", vr: VR::DA },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0030)), keyword: "StudyTime", vr: VR::TM },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0031)), keyword: "SeriesTime", vr: VR::TM },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0032)), keyword: "AcquisitionTime", vr: VR::TM },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0033)), keyword: "ContentTime", vr: VR::TM },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0050)), keyword: "AccessionNumber", vr: VR::SH },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0060)), keyword: "Modality", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0064)), keyword: "ConversionType", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0070)), keyword: "Manufacturer", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0080)), keyword: "InstitutionName", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0081)), keyword: "InstitutionAddress", vr: VR::ST },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0090)), keyword: "ReferringPhysicianName", vr: VR::PN },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0100)), keyword: "CodeValue", vr: VR::SH },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0102)), keyword: "CodingSchemeDesignator", vr: VR::SH },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0104)), keyword: "CodeMeaning", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x0201)), keyword: "TimezoneOffsetFromUTC", vr: VR::SH },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1010)), keyword: "StationName", vr: VR::SH },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1030)), keyword: "StudyDescription", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1032)), keyword: "ProcedureCodeSequence", vr: VR::SQ },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x103E)), keyword: "SeriesDescription", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1040)), keyword: "InstitutionalDepartmentName", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1048)), keyword: "PhysiciansOfRecord", vr: VR::PN },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1050)), keyword: "PerformingPhysicianName", vr: VR::PN },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1060)), keyword: "NameOfPhysiciansReadingStudy", vr: VR::PN },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1070)), keyword: "OperatorsName", vr: VR::PN },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1080)), keyword: "AdmittingDiagnosesDescription", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1090)), keyword: "ManufacturerModelName", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1110)), keyword: "ReferencedStudySequence", vr: VR::SQ },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1111)), keyword: "ReferencedPerformedProcedureStepSequence", vr: VR::SQ },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1120)), keyword: "ReferencedPatientSequence", vr: VR::SQ },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1140)), keyword: "ReferencedImageSequence", vr: VR::SQ },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1150)), keyword: "ReferencedSOPClassUID", vr: VR::UI },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x1155)), keyword: "ReferencedSOPInstanceUID", vr: VR::UI },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x2111)), keyword: "DerivationDescription", vr: VR::ST },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x2112)), keyword: "SourceImageSequence", vr: VR::SQ },
    DictionaryEntry { tag: Single(Tag(0x0008, 0x2218)), keyword: "AnatomicRegionSequence", vr: VR::SQ },
    DictionaryEntry { tag: Single(Tag(0x0010, 0x0010)), keyword: "PatientName", vr: VR::PN },
    DictionaryEntry { tag: Single(Tag(0x0010, 0x0020)), keyword: "PatientID", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0010, 0x0021)), keyword: "IssuerOfPatientID", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0010, 0x0030)), keyword: "PatientBirthDate", vr: VR::DA },
    DictionaryEntry { tag: Single(Tag(0x0010, 0x0032)), keyword: "PatientBirthTime", vr: VR::TM },
    DictionaryEntry { tag: Single(Tag(0x0010, 0x0040)), keyword: "PatientSex", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0010, 0x1001)), keyword: "OtherPatientNames", vr: VR::PN },
    DictionaryEntry { tag: Single(Tag(0x0010, 0x1010)), keyword: "PatientAge", vr: VR::AS },
    DictionaryEntry { tag: Single(Tag(0x0010, 0x1020)), keyword: "PatientSize", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0010, 0x1030)), keyword: "PatientWeight", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0010, 0x1040)), keyword: "PatientAddress", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0010, 0x2160)), keyword: "EthnicGroup", vr: VR::SH },
    DictionaryEntry { tag: Single(Tag(0x0010, 0x21B0)), keyword: "AdditionalPatientHistory", vr: VR::LT },
    DictionaryEntry { tag: Single(Tag(0x0010, 0x4000)), keyword: "PatientComments", vr: VR::LT },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0010)), keyword: "ContrastBolusAgent", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0015)), keyword: "BodyPartExamined", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0020)), keyword: "ScanningSequence", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0021)), keyword: "SequenceVariant", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0022)), keyword: "ScanOptions", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0023)), keyword: "MRAcquisitionType", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0024)), keyword: "SequenceName", vr: VR::SH },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0025)), keyword: "AngioFlag", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0050)), keyword: "SliceThickness", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0060)), keyword: "KVP", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0080)), keyword: "RepetitionTime", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0081)), keyword: "EchoTime", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0082)), keyword: "InversionTime", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0083)), keyword: "NumberOfAverages", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0084)), keyword: "ImagingFrequency", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0085)), keyword: "ImagedNucleus", vr: VR::SH },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0086)), keyword: "EchoNumbers", vr: VR::IS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0087)), keyword: "MagneticFieldStrength", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0088)), keyword: "SpacingBetweenSlices", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0089)), keyword: "NumberOfPhaseEncodingSteps", vr: VR::IS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0091)), keyword: "EchoTrainLength", vr: VR::IS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0093)), keyword: "PercentSampling", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0094)), keyword: "PercentPhaseFieldOfView", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x0095)), keyword: "PixelBandwidth", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1000)), keyword: "DeviceSerialNumber", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1020)), keyword: "SoftwareVersions", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1030)), keyword: "ProtocolName", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1050)), keyword: "SpatialResolution", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1063)), keyword: "FrameTime", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1088)), keyword: "HeartRate", vr: VR::IS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1090)), keyword: "CardiacNumberOfImages", vr: VR::IS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1100)), keyword: "ReconstructionDiameter", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1110)), keyword: "DistanceSourceToDetector", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1111)), keyword: "DistanceSourceToPatient", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1120)), keyword: "GantryDetectorTilt", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1130)), keyword: "TableHeight", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1140)), keyword: "RotationDirection", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1150)), keyword: "ExposureTime", vr: VR::IS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1151)), keyword: "XRayTubeCurrent", vr: VR::IS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1152)), keyword: "Exposure", vr: VR::IS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1160)), keyword: "FilterType", vr: VR::SH },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1170)), keyword: "GeneratorPower", vr: VR::IS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1190)), keyword: "FocalSpots", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1210)), keyword: "ConvolutionKernel", vr: VR::SH },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1310)), keyword: "AcquisitionMatrix", vr: VR::US },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1312)), keyword: "InPlanePhaseEncodingDirection", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1314)), keyword: "FlipAngle", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1315)), keyword: "VariableFlipAngleFlag", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x1316)), keyword: "SAR", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x5100)), keyword: "PatientPosition", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0018, 0x5101)), keyword: "ViewPosition", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0020, 0x000D)), keyword: "StudyInstanceUID", vr: VR::UI },
    DictionaryEntry { tag: Single(Tag(0x0020, 0x000E)), keyword: "SeriesInstanceUID", vr: VR::UI },
    DictionaryEntry { tag: Single(Tag(0x0020, 0x0010)), keyword: "StudyID", vr: VR::SH },
    DictionaryEntry { tag: Single(Tag(0x0020, 0x0011)), keyword: "SeriesNumber", vr: VR::IS },
    DictionaryEntry { tag: Single(Tag(0x0020, 0x0012)), keyword: "AcquisitionNumber", vr: VR::IS },
    DictionaryEntry { tag: Single(Tag(0x0020, 0x0013)), keyword: "InstanceNumber", vr: VR::IS },
    DictionaryEntry { tag: Single(Tag(0x0020, 0x0020)), keyword: "PatientOrientation", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0020, 0x0032)), keyword: "ImagePositionPatient", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0020, 0x0037)), keyword: "ImageOrientationPatient", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0020, 0x0052)), keyword: "FrameOfReferenceUID", vr: VR::UI },
    DictionaryEntry { tag: Single(Tag(0x0020, 0x0060)), keyword: "Laterality", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0020, 0x1002)), keyword: "ImagesInAcquisition", vr: VR::IS },
    DictionaryEntry { tag: Single(Tag(0x0020, 0x1040)), keyword: "PositionReferenceIndicator", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0020, 0x1041)), keyword: "SliceLocation", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0020, 0x4000)), keyword: "ImageComments", vr: VR::LT },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0002)), keyword: "SamplesPerPixel", vr: VR::US },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0004)), keyword: "PhotometricInterpretation", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0006)), keyword: "PlanarConfiguration", vr: VR::US },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0008)), keyword: "NumberOfFrames", vr: VR::IS },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0009)), keyword: "FrameIncrementPointer", vr: VR::AT },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0010)), keyword: "Rows", vr: VR::US },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0011)), keyword: "Columns", vr: VR::US },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0012)), keyword: "Planes", vr: VR::US },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0030)), keyword: "PixelSpacing", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0034)), keyword: "PixelAspectRatio", vr: VR::IS },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0100)), keyword: "BitsAllocated", vr: VR::US },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0101)), keyword: "BitsStored", vr: VR::US },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0102)), keyword: "HighBit", vr: VR::US },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0103)), keyword: "PixelRepresentation", vr: VR::US },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0106)), keyword: "SmallestImagePixelValue", vr: VR::US },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0107)), keyword: "LargestImagePixelValue", vr: VR::US },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0120)), keyword: "PixelPaddingValue", vr: VR::US },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x0301)), keyword: "BurnedInAnnotation", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x1050)), keyword: "WindowCenter", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x1051)), keyword: "WindowWidth", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x1052)), keyword: "RescaleIntercept", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x1053)), keyword: "RescaleSlope", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x1054)), keyword: "RescaleType", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x1055)), keyword: "WindowCenterWidthExplanation", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x2110)), keyword: "LossyImageCompression", vr: VR::CS },
    DictionaryEntry { tag: Single(Tag(0x0028, 0x2112)), keyword: "LossyImageCompressionRatio", vr: VR::DS },
    DictionaryEntry { tag: Single(Tag(0x0032, 0x1032)), keyword: "RequestingPhysician", vr: VR::PN },
    DictionaryEntry { tag: Single(Tag(0x0032, 0x1060)), keyword: "RequestedProcedureDescription", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0032, 0x4000)), keyword: "StudyComments", vr: VR::LT },
    DictionaryEntry { tag: Single(Tag(0x0040, 0x0007)), keyword: "ScheduledProcedureStepDescription", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0040, 0x0009)), keyword: "ScheduledProcedureStepID", vr: VR::SH },
    DictionaryEntry { tag: Single(Tag(0x0040, 0x0244)), keyword: "PerformedProcedureStepStartDate", vr: VR::DA },
    DictionaryEntry { tag: Single(Tag(0x0040, 0x0245)), keyword: "PerformedProcedureStepStartTime", vr: VR::TM },
    DictionaryEntry { tag: Single(Tag(0x0040, 0x0253)), keyword: "PerformedProcedureStepID", vr: VR::SH },
    DictionaryEntry { tag: Single(Tag(0x0040, 0x0254)), keyword: "PerformedProcedureStepDescription", vr: VR::LO },
    DictionaryEntry { tag: Single(Tag(0x0040, 0x0275)), keyword: "RequestAttributesSequence", vr: VR::SQ },
    DictionaryEntry { tag: Single(Tag(0x0040, 0x1001)), keyword: "RequestedProcedureID", vr: VR::SH },
    DictionaryEntry { tag: Group100(Tag(0x5000, 0x0005)), keyword: "CurveDimensions", vr: VR::US },
    DictionaryEntry { tag: Group100(Tag(0x5000, 0x0010)), keyword: "NumberOfPoints", vr: VR::US },
    DictionaryEntry { tag: Group100(Tag(0x5000, 0x0020)), keyword: "TypeOfData", vr: VR::CS },
    DictionaryEntry { tag: Group100(Tag(0x5000, 0x0022)), keyword: "CurveDescription", vr: VR::LO },
    DictionaryEntry { tag: Group100(Tag(0x5000, 0x0030)), keyword: "AxisUnits", vr: VR::SH },
    DictionaryEntry { tag: Group100(Tag(0x5000, 0x0040)), keyword: "AxisLabels", vr: VR::SH },
    DictionaryEntry { tag: Group100(Tag(0x5000, 0x0103)), keyword: "DataValueRepresentation", vr: VR::US },
    DictionaryEntry { tag: Group100(Tag(0x5000, 0x3000)), keyword: "CurveData", vr: VR::OW },
    DictionaryEntry { tag: Group100(Tag(0x6000, 0x0010)), keyword: "OverlayRows", vr: VR::US },
    DictionaryEntry { tag: Group100(Tag(0x6000, 0x0011)), keyword: "OverlayColumns", vr: VR::US },
    DictionaryEntry { tag: Group100(Tag(0x6000, 0x0015)), keyword: "NumberOfFramesInOverlay", vr: VR::IS },
    DictionaryEntry { tag: Group100(Tag(0x6000, 0x0022)), keyword: "OverlayDescription", vr: VR::LO },
    DictionaryEntry { tag: Group100(Tag(0x6000, 0x0040)), keyword: "OverlayType", vr: VR::CS },
    DictionaryEntry { tag: Group100(Tag(0x6000, 0x0045)), keyword: "OverlaySubtype", vr: VR::LO },
    DictionaryEntry { tag: Group100(Tag(0x6000, 0x0050)), keyword: "OverlayOrigin", vr: VR::SS },
    DictionaryEntry { tag: Group100(Tag(0x6000, 0x0051)), keyword: "ImageFrameOrigin", vr: VR::US },
    DictionaryEntry { tag: Group100(Tag(0x6000, 0x0100)), keyword: "OverlayBitsAllocated", vr: VR::US },
    DictionaryEntry { tag: Group100(Tag(0x6000, 0x0102)), keyword: "OverlayBitPosition", vr: VR::US },
    DictionaryEntry { tag: Group100(Tag(0x6000, 0x1500)), keyword: "OverlayLabel", vr: VR::LO },
    DictionaryEntry { tag: Group100(Tag(0x6000, 0x3000)), keyword: "OverlayData", vr: VR::OW },
    DictionaryEntry { tag: Single(Tag(0x7FE0, 0x0010)), keyword: "PixelData", vr: VR::OW },
];
